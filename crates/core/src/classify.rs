/// Property tag for numbers equal to the sum of their digits raised to the digit count
pub const ARMSTRONG: &str = "armstrong";
pub const EVEN: &str = "even";
pub const ODD: &str = "odd";

/// Check whether `n` is prime using trial division up to its integer square root.
///
/// Numbers lower than 2 (including every negative number) are never prime.
pub fn is_prime(n: i64) -> bool {
    if n <= 1 {
        return false;
    }

    let mut i = 2;
    // `i <= n / i` is `i * i <= n` without the overflow near i64::MAX.
    while i <= n / i {
        if n % i == 0 {
            return false;
        }
        i += 1;
    }

    true
}

/// Check whether `n` equals the sum of its proper divisors.
///
/// Walks every candidate in `[1, n)`, so the cost is linear in `n`.
pub fn is_perfect(n: i64) -> bool {
    if n <= 1 {
        return false;
    }

    let sum: i128 = (1..n).filter(|i| n % i == 0).map(i128::from).sum();

    sum == i128::from(n)
}

/// Sum of the decimal digits of `n`, ignoring its sign.
pub fn digit_sum(n: i64) -> i64 {
    let mut rest = n.unsigned_abs();
    let mut sum = 0;

    while rest > 0 {
        sum += rest % 10;
        rest /= 10;
    }

    // At most 19 digits of 9, always fits.
    sum as i64
}

/// Check whether `n` is an Armstrong (narcissistic) number.
///
/// Negative numbers have no digits to count and never match. Zero has no
/// digits either, so both sides of the comparison are 0 and it matches.
pub fn is_armstrong(n: i64) -> bool {
    if n < 0 {
        return false;
    }

    let n = n as u64;
    let count = digit_count(n);

    let mut rest = n;
    let mut sum: u128 = 0;
    while rest > 0 {
        sum += u128::from(rest % 10).pow(count);
        rest /= 10;
    }

    sum == u128::from(n)
}

fn digit_count(n: u64) -> u32 {
    let mut count = 0;
    let mut rest = n;

    while rest > 0 {
        count += 1;
        rest /= 10;
    }

    count
}

/// Ordered property tags: `armstrong` first when it applies, then the parity.
pub fn properties(n: i64) -> Vec<String> {
    let mut tags = Vec::with_capacity(2);

    if is_armstrong(n) {
        tags.push(ARMSTRONG.to_string());
    }

    if n % 2 == 0 {
        tags.push(EVEN.to_string());
    } else {
        tags.push(ODD.to_string());
    }

    tags
}
