//! Witness filtering and unification.
//!
//! Collection hands over every observed candidate, absent entries and
//! duplicates included. This module decides what a batch of evidence is
//! collectively worth: either one printable type, or nothing confident
//! enough to write.

use itertools::Itertools;
use smol_str::SmolStr;
use ts_oracle::{TypeId, TypeOracle};

/// Widest a literal union is allowed to grow. Up to this many distinct
/// witnesses keep their literal precision (`1 | 4 | 3 | 2` tells a reader
/// more than `number`); above it the evidence is widened to a general
/// type, or discarded as too noisy to union meaningfully.
const MAX_UNION_WITNESSES: usize = 4;

/// Drop witnesses that cannot back a written annotation: absent ones,
/// `any` in any form, `import(...)`-qualified expressions, and `never` in
/// any form. Order is preserved.
pub fn filter_unusable_types<O: TypeOracle>(
    oracle: &O,
    witnesses: Vec<Option<TypeId>>,
) -> Vec<TypeId> {
    witnesses
        .into_iter()
        .flatten()
        .filter(|&ty| {
            let text = oracle.print_type(ty);
            !oracle.is_any_type(ty)
                && !text.contains("any[]")
                && !text.contains(": any")
                && !text.contains("import(")
                && !oracle.is_never_type(ty)
                && !text.contains("never[]")
                && !text.contains(": never")
        })
        .collect()
}

/// Reduce filtered witnesses to a single printable type, or `None` when
/// the evidence is empty or too heterogeneous.
///
/// Witnesses are deduplicated by printed text first (set semantics,
/// first-seen order): the same evidence observed many times is one
/// observation, and must not push the batch over the widening threshold.
pub fn compute_types_from_list<O: TypeOracle>(oracle: &O, types: &[TypeId]) -> Option<SmolStr> {
    let types: Vec<TypeId> = types
        .iter()
        .copied()
        .unique_by(|&ty| oracle.print_type(ty))
        .collect();

    if types.is_empty() {
        return None;
    }
    // true/false literals collapse to the two-valued type regardless of
    // how many there are.
    if types
        .iter()
        .all(|&ty| oracle.is_boolean_literal(ty) || oracle.is_boolean_type(ty))
    {
        return Some(SmolStr::new_static("boolean"));
    }
    if let [only] = types.as_slice() {
        return Some(oracle.print_type(*only));
    }

    let all_number = types
        .iter()
        .all(|&ty| oracle.is_number_type(ty) || oracle.is_number_literal(ty));
    let all_string = types
        .iter()
        .all(|&ty| oracle.is_string_type(ty) || oracle.is_string_literal(ty));

    if types.len() <= MAX_UNION_WITNESSES {
        // A general type among the literals already subsumes them.
        if all_number && types.iter().any(|&ty| oracle.is_number_type(ty)) {
            return Some(SmolStr::new_static("number"));
        }
        if all_string && types.iter().any(|&ty| oracle.is_string_type(ty)) {
            return Some(SmolStr::new_static("string"));
        }
        let union = types.iter().map(|&ty| oracle.print_type(ty)).join(" | ");
        return Some(union.into());
    }

    if all_number {
        return Some(SmolStr::new_static("number"));
    }
    if all_string {
        return Some(SmolStr::new_static("string"));
    }
    None
}

#[cfg(test)]
mod tests {
    use ts_oracle::fixture::FixtureOracle;

    use super::*;

    #[track_caller]
    fn expect_unified(fx: &FixtureOracle, types: Vec<Option<TypeId>>, expected: Option<&str>) {
        let usable = filter_unusable_types(fx, types);
        let unified = compute_types_from_list(fx, &usable);
        assert_eq!(unified.as_deref(), expected);
    }

    #[test]
    fn no_witnesses_means_no_type() {
        let fx = FixtureOracle::new();
        expect_unified(&fx, vec![], None);
        expect_unified(&fx, vec![None, None], None);
    }

    #[test]
    fn a_single_literal_witness_stays_literal() {
        let mut fx = FixtureOracle::new();
        let lit = fx.ty_number_literal("1234");
        expect_unified(&fx, vec![Some(lit)], Some("1234"));
    }

    #[test]
    fn four_numeric_literals_union_in_first_seen_order() {
        let mut fx = FixtureOracle::new();
        let witnesses = ["1", "4", "3", "2"]
            .map(|text| Some(fx.ty_number_literal(text)))
            .to_vec();
        expect_unified(&fx, witnesses, Some("1 | 4 | 3 | 2"));
    }

    #[test]
    fn five_distinct_numeric_literals_widen_to_number() {
        let mut fx = FixtureOracle::new();
        let witnesses = ["1", "4", "3", "2", "5"]
            .map(|text| Some(fx.ty_number_literal(text)))
            .to_vec();
        expect_unified(&fx, witnesses, Some("number"));
    }

    #[test]
    fn five_distinct_string_literals_widen_to_string() {
        let mut fx = FixtureOracle::new();
        let witnesses = ["1", "4", "3", "2", "5"]
            .map(|text| Some(fx.ty_string_literal(text)))
            .to_vec();
        expect_unified(&fx, witnesses, Some("string"));
    }

    #[test]
    fn repeated_identical_string_literals_deduplicate_instead_of_widening() {
        let mut fx = FixtureOracle::new();
        let witnesses: Vec<_> = (0..5).map(|_| Some(fx.ty_string_literal("1"))).collect();
        expect_unified(&fx, witnesses, Some("\"1\""));
    }

    #[test]
    fn boolean_literals_collapse_to_boolean() {
        let mut fx = FixtureOracle::new();
        let t = fx.ty_boolean_literal(true);
        let f = fx.ty_boolean_literal(false);
        expect_unified(&fx, vec![Some(t)], Some("boolean"));
        expect_unified(&fx, vec![Some(t), Some(f), Some(t)], Some("boolean"));
    }

    #[test]
    fn a_general_type_among_literals_subsumes_them() {
        let mut fx = FixtureOracle::new();
        let one = fx.ty_number_literal("1");
        let number = fx.ty_number();
        expect_unified(&fx, vec![Some(one), Some(number)], Some("number"));
    }

    #[test]
    fn mixed_witnesses_union_up_to_the_threshold() {
        let mut fx = FixtureOracle::new();
        let one = fx.ty_number_literal("1");
        let name = fx.ty_named("User");
        expect_unified(&fx, vec![Some(one), Some(name)], Some("1 | User"));
    }

    #[test]
    fn heterogeneous_evidence_above_the_threshold_is_discarded() {
        let mut fx = FixtureOracle::new();
        let mut witnesses: Vec<_> = ["1", "2", "3", "4"]
            .map(|text| Some(fx.ty_number_literal(text)))
            .to_vec();
        let name = fx.ty_named("User");
        witnesses.push(Some(name));
        expect_unified(&fx, witnesses, None);
    }

    #[test]
    fn unusable_witnesses_are_filtered_out() {
        let mut fx = FixtureOracle::new();
        let any = fx.ty_any();
        let any_array = fx.ty_array(any);
        let never = fx.ty_never();
        let never_array = fx.ty_array(never);
        let imported = fx.ty_imported("./user", "User");
        let object_with_any = fx.ty_object(&[("cache", any)]);
        expect_unified(
            &fx,
            vec![
                Some(any),
                Some(any_array),
                Some(never),
                Some(never_array),
                Some(imported),
                Some(object_with_any),
                None,
            ],
            None,
        );

        // The one usable witness survives the noise around it.
        let mut fx = FixtureOracle::new();
        let any = fx.ty_any();
        let user = fx.ty_named("User");
        expect_unified(&fx, vec![Some(any), Some(user), None], Some("User"));
    }
}
