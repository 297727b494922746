// Copyright (c) Facebook, Inc. and its affiliates.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! Basic polynomial operations.
//!
//! This module provides a set of functions for basic polynomial operations, including:
//! - Polynomial evaluation.
//! - Polynomial interpolation.
//! - Addition, multiplication, subtraction, and division of polynomials.
//! - Formal derivatives and greatest common divisors.
//!
//! Polynomials are represented as slices of field elements with the coefficient of the constant
//! term at index 0. A polynomial with no leading zero coefficients is said to be in canonical
//! form; the canonical form of the zero polynomial is an empty slice.

use crate::{
    field::FieldElement,
    utils::{self as crate_utils, format_terms},
};

#[cfg(test)]
mod tests;

// POLYNOMIAL EVALUATION
// ================================================================================================

/// Evaluates polynomial `p` at coordinate `x`.
///
/// The coefficients of `p` may live in a subfield of `x`'s field.
///
/// # Examples
/// ```
/// # use hermite_math::{polynom::*, fields::Rational, FieldElement};
/// // define polynomial: f(x) = 3 * x^2 + 2 * x + 1
/// let p = (1u64..4).map(Rational::from).collect::<Vec<_>>();
///
/// // evaluate the polynomial at point 4
/// let x = Rational::from(4u64);
/// assert_eq!(Rational::from(57u64), eval(&p, &x));
/// ```
pub fn eval<B, E>(p: &[B], x: &E) -> E
where
    B: FieldElement,
    E: FieldElement + From<B>,
{
    // Horner evaluation
    p.iter()
        .rev()
        .fold(E::zero(), |acc, coeff| acc * x.clone() + E::from(coeff.clone()))
}

/// Evaluates polynomial `p` at all coordinates in `xs` slice.
pub fn eval_many<B, E>(p: &[B], xs: &[E]) -> Vec<E>
where
    B: FieldElement,
    E: FieldElement + From<B>,
{
    xs.iter().map(|x| eval(p, x)).collect()
}

// POLYNOMIAL INTERPOLATION
// ================================================================================================

/// Returns a polynomial in coefficient form interpolated from a set of X and Y coordinates.
///
/// Uses [Lagrange interpolation](https://en.wikipedia.org/wiki/Lagrange_polynomial) to build a
/// polynomial from X and Y coordinates. If `remove_leading_zeros = true`, all leading coefficients
/// which are ZEROs will be truncated; otherwise, the length of result will be equal to the number
/// of X coordinates.
///
/// # Panics
/// Panics if number of X and Y coordinates is not the same, or if X coordinates are not unique.
pub fn interpolate<E: FieldElement>(xs: &[E], ys: &[E], remove_leading_zeros: bool) -> Vec<E> {
    assert!(xs.len() == ys.len(), "Number of X and Y coordinates must be the same");

    let roots = get_zero_roots(xs);
    let mut numerators: Vec<Vec<E>> = Vec::with_capacity(xs.len());
    for xcoord in xs {
        numerators.push(div(&roots, &[-xcoord.clone(), E::one()]));
    }

    let mut denominators: Vec<E> = Vec::with_capacity(xs.len());
    for (numerator, xcoord) in numerators.iter().zip(xs) {
        denominators.push(eval(numerator, xcoord));
    }
    assert!(
        denominators.iter().all(|d| !d.is_zero()),
        "X coordinates must be unique"
    );
    let denominators = crate_utils::batch_inversion(&denominators);

    let mut result = E::zeroed_vector(xs.len());
    for i in 0..xs.len() {
        if ys[i].is_zero() {
            continue;
        }
        let y_slice = ys[i].clone() * denominators[i].clone();
        for (res, coeff) in result.iter_mut().zip(numerators[i].iter()) {
            if !coeff.is_zero() {
                *res += coeff.clone() * y_slice.clone();
            }
        }
    }

    if remove_leading_zeros {
        self::remove_leading_zeros(&result)
    } else {
        result
    }
}

// POLYNOMIAL MATH OPERATIONS
// ================================================================================================

/// Returns a polynomial resulting from adding two polynomials together.
///
/// Polynomials `a` and `b` are expected to be in the coefficient form, and the returned
/// polynomial will be in the coefficient form as well. The length of the returned vector
/// will be max(a.len(), b.len()).
pub fn add<E: FieldElement>(a: &[E], b: &[E]) -> Vec<E> {
    let result_len = core::cmp::max(a.len(), b.len());
    let mut result = Vec::with_capacity(result_len);
    for i in 0..result_len {
        let c1 = a.get(i).cloned().unwrap_or_else(E::zero);
        let c2 = b.get(i).cloned().unwrap_or_else(E::zero);
        result.push(c1 + c2);
    }
    result
}

/// Returns a polynomial resulting from subtracting one polynomial from another.
///
/// Specifically, subtracts polynomial `b` from polynomial `a` and returns the result. The
/// length of the returned vector will be max(a.len(), b.len()).
pub fn sub<E: FieldElement>(a: &[E], b: &[E]) -> Vec<E> {
    let result_len = core::cmp::max(a.len(), b.len());
    let mut result = Vec::with_capacity(result_len);
    for i in 0..result_len {
        let c1 = a.get(i).cloned().unwrap_or_else(E::zero);
        let c2 = b.get(i).cloned().unwrap_or_else(E::zero);
        result.push(c1 - c2);
    }
    result
}

/// Returns a polynomial resulting from multiplying two polynomials together.
///
/// The length of the returned vector will be a.len() + b.len() - 1; if either of the inputs is
/// empty, an empty vector is returned.
pub fn mul<E: FieldElement>(a: &[E], b: &[E]) -> Vec<E> {
    if a.is_empty() || b.is_empty() {
        return Vec::new();
    }

    let result_len = a.len() + b.len() - 1;
    let mut result = E::zeroed_vector(result_len);
    for (i, ai) in a.iter().enumerate() {
        if ai.is_zero() {
            continue;
        }
        for (j, bj) in b.iter().enumerate() {
            result[i + j] += ai.clone() * bj.clone();
        }
    }
    result
}

/// Returns a polynomial resulting from multiplying a given polynomial by a scalar value.
///
/// Specifically, multiplies every coefficient of polynomial `p` by constant `k` and returns
/// the resulting vector.
pub fn mul_by_const<E: FieldElement>(p: &[E], k: &E) -> Vec<E> {
    p.iter().map(|coeff| coeff.clone() * k.clone()).collect()
}

/// Returns a polynomial resulting from dividing one polynomial by another.
///
/// Specifically, divides polynomial `a` by polynomial `b` and returns the result. If the
/// polynomials don't divide evenly, the remainder is ignored.
///
/// # Panics
/// Panics if:
/// * Polynomial `b` is the zero polynomial.
/// * Degree of `a` is smaller than the degree of `b`, unless `a` is the zero polynomial.
pub fn div<E: FieldElement>(a: &[E], b: &[E]) -> Vec<E> {
    let bpos = degree_of(b);
    assert!(
        b.get(bpos).is_some_and(|lead| !lead.is_zero()),
        "cannot divide polynomial by zero"
    );
    if a.iter().all(|c| c.is_zero()) {
        return Vec::new();
    }

    let mut apos = degree_of(a);
    assert!(apos >= bpos, "cannot divide by polynomial of higher degree");
    let mut a = a[..=apos].to_vec();

    let lead_inv = b[bpos].inv();
    let mut result = E::zeroed_vector(apos - bpos + 1);
    for i in (0..result.len()).rev() {
        let quot = a[apos].clone() * lead_inv.clone();
        for j in (0..bpos).rev() {
            a[i + j] -= b[j].clone() * quot.clone();
        }
        result[i] = quot;
        apos = apos.wrapping_sub(1);
    }

    result
}

/// Returns the quotient and remainder of dividing polynomial `a` by polynomial `b`.
///
/// Both parts are returned in canonical form, and the degree of the remainder is always smaller
/// than the degree of `b`.
///
/// # Panics
/// Panics if `b` is the zero polynomial.
pub fn div_rem<E: FieldElement>(a: &[E], b: &[E]) -> (Vec<E>, Vec<E>) {
    let b = remove_leading_zeros(b);
    assert!(!b.is_empty(), "cannot divide polynomial by zero");

    let mut remainder = remove_leading_zeros(a);
    if remainder.len() < b.len() {
        return (Vec::new(), remainder);
    }

    let bpos = b.len() - 1;
    let lead_inv = b[bpos].inv();
    let mut quotient = E::zeroed_vector(remainder.len() - bpos);
    for i in (0..quotient.len()).rev() {
        let quot = remainder[i + bpos].clone() * lead_inv.clone();
        if quot.is_zero() {
            continue;
        }
        for (j, bj) in b.iter().enumerate() {
            remainder[i + j] -= bj.clone() * quot.clone();
        }
        quotient[i] = quot;
    }
    remainder.truncate(bpos);

    (remove_leading_zeros(&quotient), remove_leading_zeros(&remainder))
}

/// Returns the formal derivative of polynomial `p`.
///
/// The derivative of a constant is the zero polynomial, represented by an empty vector.
pub fn derivative<E: FieldElement>(p: &[E]) -> Vec<E> {
    p.iter()
        .enumerate()
        .skip(1)
        .map(|(i, coeff)| coeff.clone() * E::from(i as u64))
        .collect()
}

/// Returns the monic greatest common divisor of polynomials `a` and `b`.
///
/// If both polynomials are zero, the zero polynomial (an empty vector) is returned.
pub fn gcd<E: FieldElement>(a: &[E], b: &[E]) -> Vec<E> {
    let mut a = remove_leading_zeros(a);
    let mut b = remove_leading_zeros(b);
    while !b.is_empty() {
        let (_, remainder) = div_rem(&a, &b);
        a = core::mem::replace(&mut b, remainder);
    }

    match a.last() {
        Some(lead) if !lead.is_one() => mul_by_const(&a, &lead.inv()),
        _ => a,
    }
}

// DEGREE INFERENCE
// ================================================================================================

/// Returns the degree of the provided polynomial.
///
/// If the size of the provided slice is much larger than the degree of the polynomial (i.e.,
/// a large number of leading coefficients is ZERO), this operation can be quite inefficient.
/// The zero polynomial is reported as having degree 0.
pub fn degree_of<E: FieldElement>(poly: &[E]) -> usize {
    for i in (0..poly.len()).rev() {
        if !poly[i].is_zero() {
            return i;
        }
    }
    0
}

/// Returns a polynomial with all leading ZERO coefficients removed.
pub fn remove_leading_zeros<E: FieldElement>(values: &[E]) -> Vec<E> {
    for i in (0..values.len()).rev() {
        if !values[i].is_zero() {
            return values[..(i + 1)].to_vec();
        }
    }
    Vec::new()
}

// FORMATTING
// ================================================================================================

/// Renders polynomial `p` in the variable `var`, highest power first.
///
/// For example, `[1, 0, -2]` in `x` renders as `-2*x^2 + 1`.
pub fn format<E: FieldElement>(p: &[E], var: &str) -> String {
    let terms = p.iter().enumerate().rev().map(|(i, coeff)| {
        let monomial = match i {
            0 => None,
            1 => Some(var.to_string()),
            _ => Some(format!("{var}^{i}")),
        };
        (coeff, monomial)
    });
    format_terms(terms)
}

// HELPER FUNCTIONS
// ================================================================================================

/// Returns the coefficients of the polynomial which is the product of (x - xs[i]) for all `i`.
///
/// The result is monic and has xs.len() + 1 coefficients.
pub fn get_zero_roots<E: FieldElement>(xs: &[E]) -> Vec<E> {
    let mut n = xs.len() + 1;
    let mut result = E::zeroed_vector(n);

    n -= 1;
    result[n] = E::one();

    for xcoord in xs {
        n -= 1;
        result[n] = E::zero();
        for j in n..xs.len() {
            let term = result[j + 1].clone() * xcoord.clone();
            result[j] -= term;
        }
    }

    result
}
