// Copyright (c) Facebook, Inc. and its affiliates.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

use proptest::prelude::*;

use super::remove_leading_zeros;
use crate::{
    field::FieldElement,
    fields::{QuadExtension, Rational, Sqrt2},
};

fn r(n: i64) -> Rational {
    Rational::from(n)
}

fn poly(coeffs: &[i64]) -> Vec<Rational> {
    coeffs.iter().copied().map(r).collect()
}

// EVALUATION
// ================================================================================================

#[test]
fn eval() {
    let x = Rational::new(-7, 3);
    let poly = [Rational::new(1, 2), r(-4), Rational::new(5, 7), r(9)];

    assert_eq!(Rational::zero(), super::eval(&poly[..0], &x));

    // constant
    assert_eq!(poly[0], super::eval(&poly[..1], &x));

    // degree 1
    let expected = poly[0].clone() + poly[1].clone() * x.clone();
    assert_eq!(expected, super::eval(&poly[..2], &x));

    // degree 3
    let x2 = x.exp(2);
    let x3 = x.exp(3);
    let expected = poly[0].clone()
        + poly[1].clone() * x.clone()
        + poly[2].clone() * x2
        + poly[3].clone() * x3;
    assert_eq!(expected, super::eval(&poly, &x));
}

#[test]
fn eval_in_extension() {
    // x^2 - 2 vanishes at sqrt(2)
    let p = poly(&[-2, 0, 1]);
    let root = QuadExtension::<Rational, Sqrt2>::root();
    assert!(super::eval(&p, &root).is_zero());

    let xs = vec![root.clone(), -root, QuadExtension::from(1i64)];
    let ys = super::eval_many(&p, &xs);
    assert_eq!(vec![QuadExtension::zero(), QuadExtension::zero(), QuadExtension::from(-1i64)], ys);
}

// ARITHMETIC
// ================================================================================================

#[test]
fn add() {
    let poly1 = poly(&[3, -1, 4]);
    let poly2 = poly(&[1, 5]);

    assert_eq!(poly(&[4, 4, 4]), super::add(&poly1, &poly2));
    assert_eq!(poly(&[4, 4, 4]), super::add(&poly2, &poly1));
    assert_eq!(poly1, super::add(&poly1, &[]));
}

#[test]
fn sub() {
    let poly1 = poly(&[3, -1, 4]);
    let poly2 = poly(&[1, 5]);

    assert_eq!(poly(&[2, -6, 4]), super::sub(&poly1, &poly2));
    assert_eq!(poly(&[-2, 6, -4]), super::sub(&poly2, &poly1));
    assert_eq!(poly(&[0, 0, 0]), super::sub(&poly1, &poly1));
}

#[test]
fn mul() {
    // (x + 1) * (x - 1) = x^2 - 1
    assert_eq!(poly(&[-1, 0, 1]), super::mul(&poly(&[1, 1]), &poly(&[-1, 1])));

    // (2x^2 + 3) * (x - 4) = 2x^3 - 8x^2 + 3x - 12
    assert_eq!(poly(&[-12, 3, -8, 2]), super::mul(&poly(&[3, 0, 2]), &poly(&[-4, 1])));

    assert!(super::mul(&poly(&[1, 2]), &[]).is_empty());
    assert!(super::mul(&[], &poly(&[1, 2])).is_empty());
}

#[test]
fn mul_by_const() {
    let p = poly(&[3, 0, -2]);
    let k = Rational::new(1, 3);
    let expected = vec![r(1), r(0), Rational::new(-2, 3)];
    assert_eq!(expected, super::mul_by_const(&p, &k));
}

#[test]
fn div() {
    // (x^2 - 1) / (x + 1) = x - 1
    assert_eq!(poly(&[-1, 1]), super::div(&poly(&[-1, 0, 1]), &poly(&[1, 1])));

    // remainder is ignored: (x^2 + 1) / (x - 1) = x + 1 rem 2
    assert_eq!(poly(&[1, 1]), super::div(&poly(&[1, 0, 1]), &poly(&[-1, 1])));

    // division by a non-monic polynomial
    let expected = vec![Rational::new(1, 2), Rational::new(1, 2)];
    assert_eq!(expected, super::div(&poly(&[-1, 0, 1]), &poly(&[-2, 2])));

    // leading zeros are ignored on both sides
    assert_eq!(poly(&[-1, 1]), super::div(&poly(&[-1, 0, 1, 0]), &poly(&[1, 1, 0])));

    assert!(super::div(&[], &poly(&[1, 1])).is_empty());
}

#[test]
#[should_panic(expected = "cannot divide polynomial by zero")]
fn div_by_zero() {
    super::div(&poly(&[1, 1]), &poly(&[0, 0]));
}

#[test]
fn div_rem() {
    // x^3 + 2x + 5 = (x^2 + x + 3) * (x - 1) + 8
    let (q, rem) = super::div_rem(&poly(&[5, 2, 0, 1]), &poly(&[-1, 1]));
    assert_eq!(poly(&[3, 1, 1]), q);
    assert_eq!(poly(&[8]), rem);

    // exact division leaves an empty remainder
    let (q, rem) = super::div_rem(&poly(&[-1, 0, 1]), &poly(&[1, 1]));
    assert_eq!(poly(&[-1, 1]), q);
    assert!(rem.is_empty());

    // dividend of lower degree
    let (q, rem) = super::div_rem(&poly(&[1, 1]), &poly(&[1, 0, 1]));
    assert!(q.is_empty());
    assert_eq!(poly(&[1, 1]), rem);
}

#[test]
fn derivative() {
    assert_eq!(poly(&[2, 0, 12]), super::derivative(&poly(&[7, 2, 0, 4])));
    assert!(super::derivative(&poly(&[7])).is_empty());
    assert!(super::derivative::<Rational>(&[]).is_empty());
}

#[test]
fn gcd() {
    // (x - 1)(x - 2) and (x - 1)(x + 3) share x - 1
    let a = super::mul(&poly(&[-1, 1]), &poly(&[-2, 1]));
    let b = super::mul(&poly(&[-1, 1]), &poly(&[3, 1]));
    assert_eq!(poly(&[-1, 1]), super::gcd(&a, &b));

    // result is monic
    let a = super::mul_by_const(&a, &r(6));
    let b = super::mul_by_const(&b, &Rational::new(-1, 4));
    assert_eq!(poly(&[-1, 1]), super::gcd(&a, &b));

    // coprime polynomials
    assert_eq!(poly(&[1]), super::gcd(&poly(&[1, 1]), &poly(&[-1, 1])));

    // zero cases
    assert_eq!(poly(&[-1, 1]), super::gcd(&poly(&[-3, 3]), &[]));
    assert!(super::gcd::<Rational>(&[], &[]).is_empty());
}

// INTERPOLATION
// ================================================================================================

#[test]
fn interpolate() {
    let xs = vec![r(-1), r(0), r(2), Rational::new(1, 2)];
    let p = vec![r(3), Rational::new(-1, 2), r(0), r(2)];
    let ys = super::eval_many(&p, &xs);

    assert_eq!(p, super::interpolate(&xs, &ys, false));

    // the cubic term cancels out for quadratic data
    let p = poly(&[1, 1, 1]);
    let ys = super::eval_many(&p, &xs);
    assert_eq!(p, super::interpolate(&xs, &ys, true));
    assert_eq!(4, super::interpolate(&xs, &ys, false).len());
}

#[test]
fn get_zero_roots() {
    // (x - 1)(x - 2)(x + 3) = x^3 - 7x + 6
    let roots = super::get_zero_roots(&poly(&[1, 2, -3]));
    assert_eq!(poly(&[6, -7, 0, 1]), roots);
    assert_eq!(poly(&[1]), super::get_zero_roots::<Rational>(&[]));
}

// DEGREE INFERENCE
// ================================================================================================

#[test]
fn degree_of() {
    assert_eq!(0, super::degree_of::<Rational>(&[]));
    assert_eq!(0, super::degree_of(&poly(&[1])));
    assert_eq!(1, super::degree_of(&poly(&[1, 2])));
    assert_eq!(1, super::degree_of(&poly(&[1, 2, 0])));
    assert_eq!(2, super::degree_of(&poly(&[1, 2, 3])));
    assert_eq!(2, super::degree_of(&poly(&[1, 2, 3, 0])));
    assert_eq!(2, super::degree_of(&poly(&[1, 2, 3, 0, 0])));
}

#[test]
fn remove_leading_zeros_trims() {
    assert_eq!(poly(&[1, 2]), remove_leading_zeros(&poly(&[1, 2, 0, 0])));
    assert_eq!(poly(&[0, 2]), remove_leading_zeros(&poly(&[0, 2])));
    assert!(remove_leading_zeros(&poly(&[0, 0])).is_empty());
}

// FORMATTING
// ================================================================================================

#[test]
fn format() {
    assert_eq!("0", super::format::<Rational>(&[], "x"));
    assert_eq!("-2*x^2 + 1", super::format(&poly(&[1, 0, -2]), "x"));
    assert_eq!("x^3 - x", super::format(&poly(&[0, -1, 0, 1]), "x"));
    assert_eq!("1/2*t + 5", super::format(&[r(5), Rational::new(1, 2)], "t"));
}

// RANDOMIZED TESTS
// ================================================================================================

fn small_poly(max_len: usize) -> impl Strategy<Value = Vec<Rational>> {
    prop::collection::vec((-20i64..20, 1i64..6), 0..max_len)
        .prop_map(|coeffs| coeffs.into_iter().map(|(n, d)| Rational::new(n, d)).collect())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn div_rem_reconstructs_dividend(a in small_poly(7), b in small_poly(4)) {
        let b = remove_leading_zeros(&b);
        prop_assume!(!b.is_empty());

        let (q, rem) = super::div_rem(&a, &b);
        let rebuilt = super::add(&super::mul(&q, &b), &rem);
        prop_assert_eq!(remove_leading_zeros(&a), remove_leading_zeros(&rebuilt));
        prop_assert!(rem.len() < b.len());
    }

    #[test]
    fn gcd_divides_both(a in small_poly(5), b in small_poly(5)) {
        let g = super::gcd(&a, &b);
        prop_assume!(!g.is_empty());

        prop_assert!(g.last().is_some_and(|c| c.is_one()));
        prop_assert!(super::div_rem(&a, &g).1.is_empty());
        prop_assert!(super::div_rem(&b, &g).1.is_empty());
    }

    #[test]
    fn mul_eval_homomorphism(a in small_poly(5), b in small_poly(5), x in -10i64..10) {
        let x = Rational::from(x);
        let product = super::eval(&super::mul(&a, &b), &x);
        prop_assert_eq!(super::eval(&a, &x) * super::eval(&b, &x), product);
    }
}
