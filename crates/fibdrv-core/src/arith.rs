//! Limb-chain arithmetic: addition, subtraction, doubling, multiplication.
//!
//! Output-buffer contracts:
//! - [`add`] and [`sub`] overwrite `result` completely; limbs `result` held
//!   beyond the written length are dropped.
//! - [`mul`] accumulates, `result += larger * smaller`. Pass a fresh zero
//!   chain to obtain the plain product.
//!
//! Every routine leaves its output in canonical form.

use crate::chain::LimbChain;
use crate::constants::BOUND;
use crate::error::FibError;

/// `result = larger + smaller`.
///
/// `larger` must have at least as many limbs as `smaller`.
pub fn add(
    larger: &LimbChain,
    smaller: &LimbChain,
    result: &mut LimbChain,
) -> Result<(), FibError> {
    debug_assert!(larger.len() >= smaller.len(), "add operands out of order");

    let mut carry = 0;
    for (i, &l) in larger.limbs.iter().enumerate() {
        let s = smaller.limbs.get(i).copied().unwrap_or(0);
        let mut sum = l + s + carry;
        carry = 0;
        if sum >= BOUND {
            sum -= BOUND;
            carry = 1;
        }
        result.store(i, sum)?;
    }

    let mut len = larger.len();
    if carry == 1 {
        result.store(len, 1)?;
        len += 1;
    }
    result.truncate(len);
    result.trim_high_zeros();
    Ok(())
}

/// `result = larger - smaller`.
///
/// `larger` must not be smaller in value (and so in limb count) than
/// `smaller`. The borrow is carried across every limb of `larger`.
pub fn sub(
    larger: &LimbChain,
    smaller: &LimbChain,
    result: &mut LimbChain,
) -> Result<(), FibError> {
    debug_assert!(larger.len() >= smaller.len(), "sub operands out of order");

    let mut borrow = 0;
    for (i, &l) in larger.limbs.iter().enumerate() {
        let rhs = smaller.limbs.get(i).copied().unwrap_or(0) + borrow;
        let diff = if l >= rhs {
            borrow = 0;
            l - rhs
        } else {
            borrow = 1;
            l + BOUND - rhs
        };
        result.store(i, diff)?;
    }
    debug_assert_eq!(borrow, 0, "sub underflowed");

    result.truncate(larger.len());
    result.trim_high_zeros();
    Ok(())
}

/// Multiply the chain by two in place.
pub fn double_inplace(chain: &mut LimbChain) -> Result<(), FibError> {
    let mut carry = 0;
    for limb in &mut chain.limbs {
        let mut doubled = (*limb << 1) + carry;
        carry = 0;
        if doubled >= BOUND {
            doubled -= BOUND;
            carry = 1;
        }
        *limb = doubled;
    }
    if carry == 1 {
        chain.append(1)?;
    }
    Ok(())
}

/// `result += larger * smaller`, schoolbook style.
///
/// Operand order does not matter for correctness; the outer loop walks
/// `smaller`, so passing the shorter chain there keeps the carry loops short.
pub fn mul(
    larger: &LimbChain,
    smaller: &LimbChain,
    result: &mut LimbChain,
) -> Result<(), FibError> {
    for (offset, &multiplier) in smaller.limbs.iter().enumerate() {
        if multiplier == 0 {
            continue;
        }

        let mut carry = 0;
        for (i, &limb) in larger.limbs.iter().enumerate() {
            let (low, high) = mul_limb(limb, multiplier);
            // Each term is at most BOUND + 1, well inside u64.
            let sum = limb_at(result, offset + i)? + low + carry;
            result.limbs[offset + i] = sum % BOUND;
            carry = high + sum / BOUND;
        }

        let mut pos = offset + larger.len();
        while carry > 0 {
            let sum = limb_at(result, pos)? + carry;
            result.limbs[pos] = sum % BOUND;
            carry = sum / BOUND;
            pos += 1;
        }
    }

    result.trim_high_zeros();
    Ok(())
}

/// Current value at `index`, zero-extending `chain` up to it first.
fn limb_at(chain: &mut LimbChain, index: usize) -> Result<u64, FibError> {
    while chain.len() <= index {
        chain.append(0)?;
    }
    Ok(chain.limbs[index])
}

/// Full product of two limbs split as `(low, high)` with
/// `a * b == high * BOUND + low`, both halves below [`BOUND`].
///
/// `b` is consumed one decimal digit at a time so every intermediate stays
/// inside u64: a digit times a limb is below `9 * BOUND`, and the part of it
/// that would cross the limb boundary at the digit's weight is split off
/// into `high` before scaling.
fn mul_limb(a: u64, b: u64) -> (u64, u64) {
    let mut low = 0;
    let mut high = 0;
    let mut rest = b;
    let mut shift = 1;
    let mut mask = BOUND;

    while rest > 0 {
        let partial = (rest % 10) * a;
        high += partial / mask;
        low += (partial % mask) * shift;
        if low >= BOUND {
            low -= BOUND;
            high += 1;
        }
        rest /= 10;
        shift *= 10;
        mask /= 10;
    }

    (low, high)
}
