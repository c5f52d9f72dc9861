use bridge::Module;

/// `name/arity` for every exported native, in installation order.
pub fn exported_signatures() -> Vec<String> {
    Module::new()
        .natives()
        .iter()
        .map(|n| format!("{}/{}", n.name, n.arity))
        .collect()
}

pub fn run_list() {
    for line in exported_signatures() {
        println!("{}", line);
    }
}
