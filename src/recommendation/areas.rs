use std::collections::HashMap;
use std::sync::LazyLock;

/// Keywords that tie a candidate's main area to course titles, descriptions
/// and tags. Matched lowercase; the area names mirror what the profile form
/// offers.
pub static AREA_KEYWORDS: LazyLock<HashMap<&'static str, &'static [&'static str]>> =
    LazyLock::new(|| {
        let entries: &[(&str, &[&str])] = &[
            (
                "Operação de Equipamentos",
                &["empilhadeira", "operação", "equipamentos", "logística"],
            ),
            (
                "Administrativa",
                &["gestão", "administrativa", "supply", "logística"],
            ),
            (
                "Manutenção Industrial",
                &["nr-10", "elétrica", "manutenção", "segurança"],
            ),
            (
                "Segurança do Trabalho",
                &["nr-", "segurança", "altura", "epi"],
            ),
        ];
        entries.iter().copied().collect()
    });

/// Keywords for an area, or an empty slice for unknown areas.
pub fn keywords_for_area(area: &str) -> &'static [&'static str] {
    AREA_KEYWORDS.get(area).copied().unwrap_or(&[])
}
