//! Member enumeration and matching.

use crate::TypeDescriptor;
use fieldmirror_types::MemberDescriptor;

/// Every member declared by `ty` and by each of its ancestors.
///
/// Subtype levels come before ancestor levels and each level keeps its
/// declaration order. Shadowed members are not de-duplicated: a subtype's
/// `label` and its ancestor's `label` both appear, the subtype's first.
pub fn enumerate_members(ty: &TypeDescriptor) -> Vec<&MemberDescriptor> {
    ty.ancestors()
        .flat_map(|level| level.declared_members())
        .collect()
}

/// Finds the candidate that is the same field as `member`.
///
/// Class-scoped constants never match. Otherwise the first candidate with
/// equal name and declared type wins, which is the most-derived declaration
/// when `candidates` comes from [`enumerate_members`].
pub fn find_match<'a>(
    candidates: &[&'a MemberDescriptor],
    member: &MemberDescriptor,
) -> Option<&'a MemberDescriptor> {
    if member.is_constant() {
        return None;
    }
    candidates
        .iter()
        .copied()
        .find(|candidate| candidate.same_field(member))
}
