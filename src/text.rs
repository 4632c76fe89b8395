//! Small case-insensitive containment helpers shared by the scoring engines.
//!
//! Matching across the platform is substring containment, not exact equality:
//! a candidate listing "Operação de Empilhadeira" must satisfy a job asking
//! for "empilhadeira".

/// True when the lowercased forms of `a` and `b` contain one another in
/// either direction.
pub(crate) fn contains_either(a: &str, b: &str) -> bool {
    let a = a.to_lowercase();
    let b = b.to_lowercase();
    a.contains(&b) || b.contains(&a)
}
