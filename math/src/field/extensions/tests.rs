// Copyright (c) Facebook, Inc. and its affiliates.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

use proptest::prelude::*;

use super::{Ln2, QuadExtension, RationalFunction, Sqrt2};
use crate::field::{ExtensionOf, FieldElement, Rational};

type Quad = QuadExtension<Rational, Sqrt2>;
type Func = RationalFunction<Rational, Ln2>;
type Tower = RationalFunction<Quad, Ln2>;

fn rat(n: i64, d: i64) -> Rational {
    Rational::new(n, d)
}

fn quad(a: Rational, b: Rational) -> Quad {
    Quad::new(a, b)
}

// QUADRATIC EXTENSION
// ================================================================================================

#[test]
fn quad_mul() {
    let sqrt2 = Quad::root();
    assert_eq!(Quad::from(2i64), sqrt2.clone() * sqrt2.clone());

    // (1 + √2) * (1 - √2) = -1
    let a = quad(rat(1, 1), rat(1, 1));
    assert_eq!(Quad::from(-1i64), a.clone() * a.conjugate());
    assert_eq!(rat(-1, 1), a.norm());

    // (2 + 3√2) * (1/2 - √2) = 1 - 6 + (-2 + 3/2)√2
    let b = quad(rat(2, 1), rat(3, 1));
    let c = quad(rat(1, 2), rat(-1, 1));
    assert_eq!(quad(rat(-5, 1), rat(-1, 2)), b * c);
}

#[test]
fn quad_inv() {
    assert_eq!(Quad::zero(), Quad::zero().inv());
    assert_eq!(Quad::one(), Quad::one().inv());

    let sqrt2 = Quad::root();
    assert_eq!(quad(rat(0, 1), rat(1, 2)), sqrt2.inv());

    let a = quad(rat(3, 7), rat(-5, 2));
    assert_eq!(Quad::one(), a.clone() * a.inv());
    assert_eq!(Quad::one(), a.clone() / a);
}

#[test]
fn quad_base_embedding() {
    let a = Quad::from_base(rat(3, 4));
    assert!(a.is_base());
    assert_eq!(&rat(3, 4), a.base_part());
    assert_eq!(&Rational::zero(), a.radical_part());

    let b = quad(rat(1, 1), rat(2, 1)).mul_base(&rat(1, 2));
    assert_eq!(quad(rat(1, 2), rat(1, 1)), b);
}

#[test]
fn quad_display() {
    assert_eq!("0", Quad::zero().to_string());
    assert_eq!("sqrt(2)", Quad::root().to_string());
    assert_eq!("-sqrt(2)", (-Quad::root()).to_string());
    assert_eq!("1/2", quad(rat(1, 2), rat(0, 1)).to_string());
    assert_eq!("1 + sqrt(2)", quad(rat(1, 1), rat(1, 1)).to_string());
    assert_eq!("1/2 - 3*sqrt(2)", quad(rat(1, 2), rat(-3, 1)).to_string());
    assert_eq!("-1 + 2/3*sqrt(2)", quad(rat(-1, 1), rat(2, 3)).to_string());
}

// RATIONAL FUNCTIONS
// ================================================================================================

#[test]
fn func_canonical_form() {
    let t = Func::indeterminate();

    // t / t = 1
    assert_eq!(Func::one(), t.clone() / t.clone());

    // (t^2 - 1) / (t - 1) = t + 1
    let numerator = vec![rat(-1, 1), rat(0, 1), rat(1, 1)];
    let denominator = vec![rat(-1, 1), rat(1, 1)];
    let f = Func::new(numerator, denominator);
    assert!(f.is_polynomial());
    assert_eq!(&[rat(1, 1), rat(1, 1)], f.numerator());
    assert_eq!(t.clone() + Func::one(), f);

    // 1 / (2t) has monic denominator t and numerator 1/2
    let g = (Func::from(2i64) * t).inv();
    assert_eq!(&[rat(1, 2)], g.numerator());
    assert_eq!(&[rat(0, 1), rat(1, 1)], g.denominator());
}

#[test]
fn func_arithmetic() {
    let t = Func::indeterminate();
    let one = Func::one();

    // 1/t + 1/t = 2/t
    let a = t.inv() + t.inv();
    assert_eq!(Func::from(2i64) / t.clone(), a);

    // 1/(t - 1) - 1/(t + 1) = 2 / (t^2 - 1)
    let b = (t.clone() - one.clone()).inv() - (t.clone() + one.clone()).inv();
    let expected = Func::from(2i64) / (t.square() - one.clone());
    assert_eq!(expected, b);

    // t is transcendental: t^2 is not a constant
    assert_ne!(Func::from(4i64), t.square());
    assert_eq!(None, t.as_base());
    assert_eq!(Some(rat(5, 3)), Func::from(rat(5, 3)).as_base());

    // subtraction of equal values gives canonical zero
    let c = (t.clone() + one.clone()) / (t.clone() - one);
    assert!((c.clone() - c).is_zero());
}

#[test]
fn func_over_quadratic_extension() {
    let t = Tower::indeterminate();
    let sqrt2 = Tower::from_base(Quad::root());

    // (√2 * t)^2 = 2 * t^2
    assert_eq!(Tower::from(2i64) * t.square(), (sqrt2.clone() * t.clone()).square());

    // 1 / (√2 * t) = √2 / (2t)
    let lhs = (sqrt2.clone() * t.clone()).inv();
    let rhs = sqrt2 / (Tower::from(2i64) * t);
    assert_eq!(lhs, rhs);
}

#[test]
fn func_display() {
    let t = Func::indeterminate();
    assert_eq!("0", Func::zero().to_string());
    assert_eq!("ln(2)", t.to_string());
    assert_eq!("1/ln(2)", t.inv().to_string());
    assert_eq!("(1/2)/ln(2)", (Func::from(2i64) * t.clone()).inv().to_string());
    assert_eq!("ln(2)^2 - 3", (t.square() - Func::from(3i64)).to_string());
    assert_eq!(
        "(ln(2) + 1)/(ln(2)^2 - 2*ln(2))",
        ((t.clone() + Func::one()) / (t.square() - Func::from(2i64) * t)).to_string()
    );
}

// RANDOMIZED TESTS
// ================================================================================================

fn small_rational() -> impl Strategy<Value = Rational> {
    (-20i64..20, 1i64..6).prop_map(|(n, d)| Rational::new(n, d))
}

fn quad_element() -> impl Strategy<Value = Quad> {
    (small_rational(), small_rational()).prop_map(|(a, b)| Quad::new(a, b))
}

fn func_element() -> impl Strategy<Value = Func> {
    (
        proptest::collection::vec(small_rational(), 0..3),
        proptest::collection::vec(small_rational(), 1..3),
    )
        .prop_filter("denominator must be non-zero", |(_, d)| d.iter().any(|c| !c.is_zero()))
        .prop_map(|(n, d)| Func::new(n, d))
}

proptest! {
    #[test]
    fn quad_field_axioms_proptest(a in quad_element(), b in quad_element(), c in quad_element()) {
        prop_assert_eq!(a.clone() * (b.clone() + c.clone()), a.clone() * b.clone() + a.clone() * c);
        prop_assert_eq!(a.clone(), (a.clone() + b.clone()) - b.clone());
        if !b.is_zero() {
            prop_assert_eq!(a.clone(), (a * b.clone()) / b);
        }
    }

    #[test]
    fn func_field_axioms_proptest(a in func_element(), b in func_element(), c in func_element()) {
        prop_assert_eq!(a.clone() * (b.clone() + c.clone()), a.clone() * b.clone() + a.clone() * c);
        prop_assert_eq!(a.clone(), (a.clone() + b.clone()) - b.clone());
        if !b.is_zero() {
            prop_assert_eq!(a.clone(), (a * b.clone()) / b);
        }
    }
}
