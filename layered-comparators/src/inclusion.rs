use layered_expect::{Mismatch, ValidationKind, Value};

use crate::equality::loose_eq;
use crate::{check, mismatch};

/// Substring for strings, member for arrays, key for objects.
pub fn contain(actual: &Value, expected: &Value) -> Result<(), Mismatch> {
    let passed = match actual {
        Value::String(haystack) => haystack.contains(&expected.to_string()),
        Value::Array(elements) => elements.iter().any(|element| loose_eq(element, expected)),
        Value::Object(object) => object.contains_key(&expected.to_string()),
        _ => false,
    };
    check(passed, actual, ValidationKind::Contain, expected)
}

/// Same members in any order; lengths must match.
pub fn have_members(actual: &Value, expected: &Value) -> Result<(), Mismatch> {
    let kind = ValidationKind::HaveMembers;
    let (Some(have), Some(want)) = (actual.as_array(), expected.as_array()) else {
        return Err(mismatch(actual, kind, expected));
    };
    check(
        have.len() == want.len() && matched_all(have, want),
        actual,
        kind,
        expected,
    )
}

/// Every expected member appears in the actual array.
pub fn include_members(actual: &Value, expected: &Value) -> Result<(), Mismatch> {
    let kind = ValidationKind::IncludeMembers;
    let (Some(have), Some(want)) = (actual.as_array(), expected.as_array()) else {
        return Err(mismatch(actual, kind, expected));
    };
    check(matched_all(have, want), actual, kind, expected)
}

pub fn have_property(actual: &Value, expected: &Value) -> Result<(), Mismatch> {
    let passed = actual
        .as_object()
        .map_or(false, |object| object.contains_key(&expected.to_string()));
    check(passed, actual, ValidationKind::HaveProperty, expected)
}

/// Each wanted member claims a distinct element of `have`.
///
/// Loose equality is not transitive, so a greedy pairing can miss a valid
/// one; claims are reassigned along augmenting paths instead.
fn matched_all(have: &[Value], want: &[Value]) -> bool {
    let mut owner: Vec<Option<usize>> = vec![None; have.len()];
    (0..want.len()).all(|member| {
        let mut visited = vec![false; have.len()];
        claim(member, have, want, &mut owner, &mut visited)
    })
}

fn claim(
    member: usize,
    have: &[Value],
    want: &[Value],
    owner: &mut [Option<usize>],
    visited: &mut [bool],
) -> bool {
    for idx in 0..have.len() {
        if visited[idx] || !loose_eq(&have[idx], &want[member]) {
            continue;
        }
        visited[idx] = true;
        let free = match owner[idx] {
            None => true,
            Some(holder) => claim(holder, have, want, owner, visited),
        };
        if free {
            owner[idx] = Some(member);
            return true;
        }
    }
    false
}
