use crate::error::BridgeError;
use crate::marshal;
use crate::value::HostValue;

pub fn native_fibonacci(args: &[HostValue]) -> Result<HostValue, BridgeError> {
    let n = marshal::int_arg("goFibonacci", args, 0)?;
    Ok(marshal::from_int(numeric::fibonacci(n)))
}

pub fn native_find_primes(args: &[HostValue]) -> Result<HostValue, BridgeError> {
    let n = marshal::int_arg("goFindPrimes", args, 0)?;
    Ok(marshal::from_ints(&numeric::primes_up_to(n)))
}

// Decimal text: the host's number type cannot hold every i64.
pub fn native_factorial(args: &[HostValue]) -> Result<HostValue, BridgeError> {
    let n = marshal::int_arg("goFactorial", args, 0)?;
    Ok(marshal::from_int_text(numeric::factorial(n)))
}

pub fn native_sum_array(args: &[HostValue]) -> Result<HostValue, BridgeError> {
    let values = marshal::numbers_arg("goSumArray", args, 0)?;
    Ok(marshal::from_int(numeric::sum_truncated(&values)))
}

pub fn native_statistics(args: &[HostValue]) -> Result<HostValue, BridgeError> {
    let values = marshal::numbers_arg("goStatistics", args, 0)?;
    Ok(marshal::from_summary(&numeric::summarize(&values)))
}
