// Copyright (c) Facebook, Inc. and its affiliates.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

use crate::field::FieldElement;


// MATH FUNCTIONS
// ================================================================================================

/// Computes a multiplicative inverse of a sequence of elements using batch inversion method.
/// Any ZEROs in the provided sequence are ignored.
pub fn batch_inversion<E: FieldElement>(values: &[E]) -> Vec<E> {
    let mut result = E::zeroed_vector(values.len());

    let mut last = E::one();
    for (result, value) in result.iter_mut().zip(values.iter()) {
        *result = last.clone();
        if !value.is_zero() {
            last *= value.clone();
        }
    }

    last = last.inv();

    for i in (0..values.len()).rev() {
        if values[i].is_zero() {
            result[i] = E::zero();
        } else {
            result[i] *= last.clone();
            last *= values[i].clone();
        }
    }

    result
}

// FORMATTING
// ================================================================================================

/// Renders a sum of terms, each given as a coefficient and an optional monomial.
///
/// Zero terms are skipped, unit coefficients are omitted, and negative terms are joined with
/// " - " instead of " + -". Coefficients which render as a compound expression are wrapped in
/// parentheses so that the output reads (and parses) unambiguously. An empty sum renders as "0".
pub fn format_terms<'a, E, I>(terms: I) -> String
where
    E: FieldElement + 'a,
    I: IntoIterator<Item = (&'a E, Option<String>)>,
{
    let mut result = String::new();
    for (coeff, monomial) in terms {
        if coeff.is_zero() {
            continue;
        }

        let term = match monomial {
            None => coeff.to_string(),
            Some(monomial) if coeff.is_one() => monomial,
            Some(monomial) if (-coeff.clone()).is_one() => format!("-{monomial}"),
            Some(monomial) => {
                let coeff = coeff.to_string();
                if is_compound(&coeff) {
                    format!("({coeff})*{monomial}")
                } else {
                    format!("{coeff}*{monomial}")
                }
            },
        };

        if result.is_empty() {
            result = term;
        } else if let Some(term) = term.strip_prefix('-') {
            result.push_str(" - ");
            result.push_str(term);
        } else {
            result.push_str(" + ");
            result.push_str(term.as_str());
        }
    }

    if result.is_empty() {
        result.push('0');
    }
    result
}

/// Returns true if `rendered` is a sum or difference of several terms.
pub fn is_compound(rendered: &str) -> bool {
    rendered.contains(' ')
}
