//! Clasificación de intención por palabras clave (expresiones regulares
//! fijas, insensibles a mayúsculas, gana la primera coincidencia).
//!
//! Las categorías temáticas se evalúan antes que `Define`, que es genérica:
//! así "What is dopamine's role..." se clasifica por el tema (dopamina) y no
//! por la fórmula de pregunta. Sin coincidencia, la intención es `Retrieve`.

use regex::Regex;
use std::sync::LazyLock;

/// Categoría gruesa asignada a una consulta; decide el consejo final y si se
/// intenta una búsqueda en el glosario.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    Greet,
    Compare,
    Design,
    Stats,
    BrainRegion,
    Neurotransmitter,
    Disorder,
    Treatment,
    Imaging,
    Define,
    Retrieve,
}

static GREET_RE: LazyLock<Regex> =
    LazyLock::new(|| regex(r"(?i)\b(hi|hello|hey|namaste|yo|greetings)\b"));
static DEFINE_RE: LazyLock<Regex> = LazyLock::new(|| {
    regex(r"(?i)\b(define|what is|meaning of|explain|tell me about|describe)\b")
});
static COMPARE_RE: LazyLock<Regex> = LazyLock::new(|| {
    regex(r"(?i)\b(vs\.?|versus|difference between|compare|distinguish|contrast)\b")
});
static DESIGN_RE: LazyLock<Regex> = LazyLock::new(|| {
    regex(
        r"(?i)\b(experiment|design|within[- ]subject|between[- ]subject|counterbalance|power|study design|methodology)\b",
    )
});
static STATS_RE: LazyLock<Regex> = LazyLock::new(|| {
    regex(
        r"(?i)\b(glm|anova|regression|multiple comparisons|fdr|permutation|effect size|confidence interval|statistical|analysis)\b",
    )
});
static BRAIN_REGION_RE: LazyLock<Regex> = LazyLock::new(|| {
    regex(
        r"(?i)\b(hippocampus|amygdala|prefrontal|dmn|default mode|broca|wernicke|arcuate|basal ganglia|striatum|cortex|thalamus|cerebellum)\b",
    )
});
static NEUROTRANSMITTER_RE: LazyLock<Regex> = LazyLock::new(|| {
    regex(
        r"(?i)\b(dopamine|serotonin|gaba|glutamate|acetylcholine|norepinephrine|endorphin|oxytocin|neurotransmitter)\b",
    )
});
static DISORDER_RE: LazyLock<Regex> = LazyLock::new(|| {
    regex(
        r"(?i)\b(adhd|parkinson|alzheimer|depression|anxiety|schizophrenia|ptsd|ocd|autism|bipolar|disorder|disease|condition)\b",
    )
});
static TREATMENT_RE: LazyLock<Regex> = LazyLock::new(|| {
    regex(r"(?i)\b(treatment|therapy|medication|drug|ssri|intervention|cure|help|manage)\b")
});
static IMAGING_RE: LazyLock<Regex> = LazyLock::new(|| {
    regex(r"(?i)\b(fmri|eeg|pet|meg|tms|mri|scan|imaging|neuroimaging)\b")
});

fn regex(pattern: &str) -> Regex {
    Regex::new(pattern).expect("patrón de intención inválido")
}

/// Orden fijo de evaluación; la primera coincidencia gana.
fn patterns() -> [(Intent, &'static LazyLock<Regex>); 10] {
    [
        (Intent::Greet, &GREET_RE),
        (Intent::Compare, &COMPARE_RE),
        (Intent::Design, &DESIGN_RE),
        (Intent::Stats, &STATS_RE),
        (Intent::BrainRegion, &BRAIN_REGION_RE),
        (Intent::Neurotransmitter, &NEUROTRANSMITTER_RE),
        (Intent::Disorder, &DISORDER_RE),
        (Intent::Treatment, &TREATMENT_RE),
        (Intent::Imaging, &IMAGING_RE),
        (Intent::Define, &DEFINE_RE),
    ]
}

/// Clasifica una consulta; `Retrieve` si ninguna categoría coincide.
pub fn detect(query: &str) -> Intent {
    for (intent, pattern) in patterns() {
        if pattern.is_match(query) {
            return intent;
        }
    }
    Intent::Retrieve
}

/// ¿La consulta es un saludo? Se consulta aparte porque el saludo corta el
/// flujo antes de la recuperación.
pub fn is_greeting(query: &str) -> bool {
    GREET_RE.is_match(query)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn topical_categories_win_over_define() {
        assert_eq!(detect("What is dopamine's role in the brain?"), Intent::Neurotransmitter);
        assert_eq!(detect("what is the hippocampus"), Intent::BrainRegion);
    }

    #[test]
    fn define_fires_without_a_topical_keyword() {
        assert_eq!(detect("define working memory"), Intent::Define);
        assert_eq!(detect("explain consolidation"), Intent::Define);
    }

    #[test]
    fn each_category_matches_its_keywords() {
        assert_eq!(detect("hello there"), Intent::Greet);
        assert_eq!(detect("EEG vs fMRI"), Intent::Compare);
        assert_eq!(detect("within-subject experiment"), Intent::Design);
        assert_eq!(detect("how to correct multiple comparisons"), Intent::Stats);
        assert_eq!(detect("symptoms of ADHD"), Intent::Disorder);
        assert_eq!(detect("which medication works"), Intent::Treatment);
        assert_eq!(detect("how does a PET scan work"), Intent::Imaging);
    }

    #[test]
    fn no_match_falls_back_to_retrieve() {
        assert_eq!(detect("sleep consolidation research"), Intent::Retrieve);
    }

    #[test]
    fn matching_is_case_insensitive() {
        assert_eq!(detect("DOPAMINE pathways"), Intent::Neurotransmitter);
        assert!(is_greeting("HELLO"));
    }
}
