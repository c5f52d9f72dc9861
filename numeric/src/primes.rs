/// Trial division up to the integer square root of `k`.
pub fn is_prime(k: i64) -> bool {
    if k < 2 {
        return false;
    }
    let mut i = 2i64;
    while i <= k / i {
        if k % i == 0 {
            return false;
        }
        i += 1;
    }
    true
}

/// All primes in `[2, n]`, ascending. Empty when `n < 2`.
///
/// Each candidate is tested independently with [`is_prime`], so the whole
/// range costs O(n·√n). Fine for the interactive sizes the bridge sees; use
/// a sieve for anything large.
pub fn primes_up_to(n: i64) -> Vec<i64> {
    if n < 2 {
        return Vec::new();
    }
    (2..=n).filter(|&k| is_prime(k)).collect()
}
