use crate::native::NativeFn;
use crate::stdlib;

pub struct NativeMeta {
    pub name: &'static str,
    pub arity: usize,
    pub func: NativeFn,
}

// THE SINGLE SOURCE OF TRUTH
// Host global names, in installation order.
pub const NATIVE_TABLE: &[NativeMeta] = &[
    NativeMeta {
        name: "goFibonacci",
        arity: 1,
        func: stdlib::native_fibonacci,
    }, // Index 0
    NativeMeta {
        name: "goFindPrimes",
        arity: 1,
        func: stdlib::native_find_primes,
    }, // Index 1
    NativeMeta {
        name: "goFactorial",
        arity: 1,
        func: stdlib::native_factorial,
    }, // Index 2
    NativeMeta {
        name: "goSumArray",
        arity: 1,
        func: stdlib::native_sum_array,
    }, // Index 3
    NativeMeta {
        name: "goStatistics",
        arity: 1,
        func: stdlib::native_statistics,
    }, // Index 4
];

// Expected native count; update this when adding or removing natives.
pub const NATIVE_COUNT: usize = 5;
const _: () = assert!(
    NATIVE_TABLE.len() == NATIVE_COUNT,
    "NATIVE_TABLE length changed, update NATIVE_COUNT"
);
