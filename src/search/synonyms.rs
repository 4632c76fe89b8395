use std::sync::LazyLock;

use super::normalize::normalize_text;

/// Synonym and related-term table covering the platform's domains. Keys and
/// values are normalized at construction so accented entries resolve against
/// normalized query terms.
static SYNONYMS: LazyLock<Vec<(String, Vec<String>)>> = LazyLock::new(|| {
    let raw: &[(&str, &[&str])] = &[
        // Operações portuárias
        (
            "empilhadeira",
            &["reach stacker", "operador", "movimentação", "carga", "armazém"],
        ),
        ("portuário", &["porto", "terminal", "cais", "doca", "marítimo"]),
        ("operador", &["operação", "controle", "manejo"]),
        ("carga", &["descarga", "carregamento", "movimentação"]),
        // Áreas técnicas
        (
            "elétrica",
            &["eletricista", "instalação", "manutenção elétrica", "circuito", "energia"],
        ),
        ("mecânica", &["mecânico", "manutenção", "reparo", "máquina"]),
        ("soldagem", &["soldador", "solda", "metalurgia"]),
        ("eletrônica", &["eletrônico", "automação", "controle"]),
        // Administrativo
        ("administração", &["administrativo", "gestão", "gerência"]),
        ("recursos humanos", &["rh", "pessoal", "gente", "talentos"]),
        ("contabilidade", &["contador", "fiscal", "financeiro"]),
        (
            "logística",
            &["supply chain", "armazém", "distribuição", "estoque"],
        ),
        // Tecnologia
        (
            "programação",
            &["código", "desenvolvimento", "software", "programador"],
        ),
        ("ti", &["tecnologia", "informática", "sistemas", "tech"]),
        ("excel", &["planilha", "spreadsheet", "dados", "office"]),
        ("word", &["documento", "texto", "editor", "office"]),
        // Comportamentais
        ("liderança", &["líder", "gestão", "coordenação", "supervisão"]),
        ("comunicação", &["comunicar", "relacionamento", "atendimento"]),
        ("trabalho em equipe", &["colaboração", "time", "grupo"]),
        ("organização", &["organizado", "planejamento", "estrutura"]),
        // Níveis
        ("básico", &["iniciante", "fundamental", "introdução", "começo"]),
        ("intermediário", &["médio", "regular", "moderado"]),
        ("avançado", &["expert", "especialista", "proficiente", "senior"]),
        // Modalidades
        ("ead", &["online", "distância", "remoto", "digital"]),
        ("presencial", &["ao vivo", "físico", "local"]),
        ("híbrido", &["misto", "blended", "combinado"]),
        // Segurança
        ("segurança", &["safety", "proteção", "prevenção", "epi"]),
        ("nr", &["norma regulamentadora", "segurança do trabalho"]),
        // Certificações
        (
            "certificação",
            &["certificado", "diploma", "qualificação", "credencial"],
        ),
        ("curso", &["treinamento", "capacitação", "formação", "aula"]),
    ];

    raw.iter()
        .map(|(key, values)| {
            (
                normalize_text(key),
                values.iter().map(|v| normalize_text(v)).collect(),
            )
        })
        .collect()
});

/// Related terms for a query term. A direct key hit returns its synonyms; a
/// value hit returns the key plus the sibling synonyms. Unknown terms return
/// an empty list.
pub fn get_synonyms(term: &str) -> Vec<String> {
    let normalized = normalize_text(term);

    for (key, synonyms) in SYNONYMS.iter() {
        if *key == normalized {
            return synonyms.clone();
        }
    }

    for (key, synonyms) in SYNONYMS.iter() {
        if synonyms.contains(&normalized) {
            let mut related = vec![key.clone()];
            related.extend(synonyms.iter().filter(|s| **s != normalized).cloned());
            return related;
        }
    }

    Vec::new()
}
