//! `JsValue` <-> [`HostValue`] conversion.
//!
//! Reading never fails: anything the bridge cannot represent becomes
//! `HostValue::Opaque` and is rejected later by the native that reads it.

use bridge::HostValue;
use js_sys::{Array, Object, Reflect};
use wasm_bindgen::{JsCast, JsValue};

pub fn to_host(value: &JsValue) -> HostValue {
    if value.is_undefined() || value.is_null() {
        return HostValue::Undefined;
    }
    if let Some(n) = value.as_f64() {
        return HostValue::Number(n);
    }
    if let Some(b) = value.as_bool() {
        return HostValue::Bool(b);
    }
    if let Some(s) = value.as_string() {
        return HostValue::Text(s);
    }
    if value.is_function() {
        return HostValue::Opaque("function".to_string());
    }
    // Typed arrays and other array-likes read the same as plain arrays.
    if Array::is_array(value) || is_array_like(value) {
        return HostValue::Array(Array::from(value).iter().map(|v| to_host(&v)).collect());
    }
    if value.is_object() {
        let entries = Object::entries(value.unchecked_ref::<Object>());
        let fields = entries
            .iter()
            .filter_map(|entry| {
                let pair: Array = entry.unchecked_into();
                let key = pair.get(0).as_string()?;
                Some((key, to_host(&pair.get(1))))
            })
            .collect();
        return HostValue::Object(fields);
    }

    let kind = value
        .js_typeof()
        .as_string()
        .unwrap_or_else(|| "unknown".to_string());
    HostValue::Opaque(kind)
}

fn is_array_like(value: &JsValue) -> bool {
    value.is_object()
        && Reflect::get(value, &JsValue::from_str("length"))
            .map(|len| len.as_f64().is_some())
            .unwrap_or(false)
}

pub fn from_host(value: &HostValue) -> Result<JsValue, JsValue> {
    let js = match value {
        HostValue::Undefined | HostValue::Opaque(_) => JsValue::UNDEFINED,
        HostValue::Bool(b) => JsValue::from_bool(*b),
        HostValue::Number(n) => JsValue::from_f64(*n),
        HostValue::Text(s) => JsValue::from_str(s),
        HostValue::Array(items) => {
            let array = Array::new_with_length(items.len() as u32);
            for (i, item) in items.iter().enumerate() {
                array.set(i as u32, from_host(item)?);
            }
            array.into()
        }
        HostValue::Object(fields) => {
            let object = Object::new();
            for (key, field) in fields {
                Reflect::set(&object, &JsValue::from_str(key), &from_host(field)?)?;
            }
            object.into()
        }
    };
    Ok(js)
}
