//! Glosario estático del dominio y extracción del término candidato de una
//! consulta. La búsqueda directa en el glosario sólo se intenta para las
//! intenciones `Define` y `BrainRegion`; si falla, el flujo cae a la
//! recuperación normal.

use regex::Regex;
use std::collections::HashMap;
use std::sync::LazyLock;

static GLOSSARY: LazyLock<HashMap<&'static str, &'static str>> =
    LazyLock::new(|| ENTRIES.iter().copied().collect());

/// Claves del glosario ordenadas de más larga a más corta, para que al buscar
/// dentro de la consulta gane la coincidencia más específica ("prefrontal
/// cortex" antes que "cortex" no está, pero sí antes que claves más cortas).
static KEYS_BY_LENGTH: LazyLock<Vec<&'static str>> = LazyLock::new(|| {
    let mut keys: Vec<&'static str> = ENTRIES.iter().map(|&(k, _)| k).collect();
    keys.sort_by_key(|k| std::cmp::Reverse(k.len()));
    keys
});

static TRIGGER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(define|what is|meaning of|explain)\s+([a-zA-Z \-]+)\??")
        .expect("regex de extracción inválida")
});

/// Definición directa de un término (clave en minúsculas).
pub fn lookup(term: &str) -> Option<&'static str> {
    GLOSSARY.get(term.to_lowercase().as_str()).copied()
}

/// Extrae el término candidato de la consulta: primero lo que sigue a una
/// frase disparadora ("define X", "what is X"...), si no, la clave conocida
/// más larga presente en la consulta con límites de palabra.
pub fn extract_term(query: &str) -> Option<String> {
    if let Some(caps) = TRIGGER_RE.captures(query) {
        let term = caps[2].trim().to_lowercase();
        if !term.is_empty() {
            return Some(term);
        }
    }

    let lowered = query.to_lowercase();
    for key in KEYS_BY_LENGTH.iter() {
        if contains_word(&lowered, key) {
            return Some((*key).to_string());
        }
    }
    None
}

/// Búsqueda de subcadena con límites de palabra (los extremos del término no
/// pueden tocar caracteres alfanuméricos).
fn contains_word(haystack: &str, needle: &str) -> bool {
    let mut start = 0;
    while let Some(pos) = haystack[start..].find(needle) {
        let begin = start + pos;
        let end = begin + needle.len();
        let before_ok = begin == 0
            || !haystack[..begin]
                .chars()
                .next_back()
                .is_some_and(|c| c.is_alphanumeric());
        let after_ok = end == haystack.len()
            || !haystack[end..].chars().next().is_some_and(|c| c.is_alphanumeric());
        if before_ok && after_ok {
            return true;
        }
        start = begin + 1;
    }
    false
}

const ENTRIES: &[(&str, &str)] = &[
    // Regiones cerebrales
    (
        "hippocampus",
        "Medial temporal lobe structure critical for forming new explicit memories and \
spatial navigation.",
    ),
    (
        "amygdala",
        "Almond-shaped limbic structure processing emotions, especially fear, threat \
detection, and emotional memory.",
    ),
    (
        "prefrontal cortex",
        "Frontal lobe regions for executive functions, planning, decision-making, impulse \
control, and working memory.",
    ),
    (
        "basal ganglia",
        "Subcortical nuclei (striatum, globus pallidus, substantia nigra) for motor control, \
habit formation, and reward learning.",
    ),
    (
        "substantia nigra",
        "Midbrain structure with dopaminergic neurons; degeneration causes Parkinson's \
disease.",
    ),
    (
        "nucleus accumbens",
        "Ventral striatum structure central to reward processing and motivation; target of \
mesolimbic dopamine pathway.",
    ),
    (
        "ventral tegmental area",
        "Midbrain region containing dopaminergic neurons; origin of reward pathways; VTA.",
    ),
    (
        "anterior cingulate cortex",
        "Medial frontal region for conflict monitoring, error detection, emotion regulation, \
and pain processing; ACC.",
    ),
    (
        "orbitofrontal cortex",
        "Ventral prefrontal region for reward valuation, impulse control, and \
decision-making; OFC.",
    ),
    (
        "dlpfc",
        "Dorsolateral prefrontal cortex: working memory, cognitive flexibility, planning, and \
executive control.",
    ),
    (
        "vmpfc",
        "Ventromedial prefrontal cortex: emotion regulation, reward valuation, moral \
reasoning, and decision-making.",
    ),
    // Neurotransmisores
    (
        "dopamine",
        "Catecholamine neurotransmitter for reward, motivation, motor control; implicated in \
Parkinson's, ADHD, addiction, schizophrenia.",
    ),
    (
        "serotonin",
        "Monoamine neurotransmitter (5-HT) modulating mood, anxiety, sleep, appetite; target \
of SSRIs for depression.",
    ),
    (
        "gaba",
        "Gamma-aminobutyric acid: primary inhibitory neurotransmitter; reduces neuronal \
excitability; target of benzodiazepines.",
    ),
    (
        "glutamate",
        "Primary excitatory neurotransmitter; crucial for learning, memory (LTP), \
neuroplasticity; excess causes excitotoxicity.",
    ),
    (
        "acetylcholine",
        "Neurotransmitter for attention, learning, memory, muscle contraction; depleted in \
Alzheimer's disease.",
    ),
    (
        "norepinephrine",
        "Catecholamine for arousal, attention, stress response; implicated in depression, \
PTSD, ADHD; noradrenaline.",
    ),
    (
        "endorphins",
        "Endogenous opioids mediating pain relief, reward, stress response; released during \
exercise and laughter.",
    ),
    (
        "oxytocin",
        "Neuropeptide promoting social bonding, trust, empathy, lactation; 'love hormone'; \
potential therapeutic for autism.",
    ),
    // Imagen y métodos
    (
        "bold",
        "Blood-oxygen-level dependent signal: fMRI measure reflecting relative \
deoxyhemoglobin changes linked to neural activity.",
    ),
    (
        "fmri",
        "Functional MRI: measures BOLD signals with high spatial (~1-3mm) and poor temporal \
(~2s) resolution.",
    ),
    (
        "eeg",
        "Electroencephalography: records scalp electrical potentials; excellent temporal \
(ms), poor spatial resolution.",
    ),
    (
        "pet",
        "Positron emission tomography: uses radiotracers to measure metabolism, \
neurotransmitter receptors, amyloid plaques.",
    ),
    (
        "tms",
        "Transcranial magnetic stimulation: magnetic pulses create transient brain \
disruptions; used for research and depression treatment.",
    ),
    (
        "meg",
        "Magnetoencephalography: measures magnetic fields from neural activity; better \
spatial localization than EEG.",
    ),
    (
        "dti",
        "Diffusion tensor imaging: MRI technique estimating white matter tract integrity and \
connectivity.",
    ),
    (
        "erp",
        "Event-related potential: time-locked EEG average revealing cognitive processing \
stages.",
    ),
    // Plasticidad y memoria
    (
        "ltp",
        "Long-term potentiation: persistent synaptic strength increase after high-frequency \
stimulation; learning mechanism.",
    ),
    (
        "ltd",
        "Long-term depression: persistent decrease in synaptic strength; complements LTP for \
learning and memory.",
    ),
    (
        "neuroplasticity",
        "Brain's ability to reorganize structure and function in response to experience, \
learning, or injury.",
    ),
    (
        "neurogenesis",
        "Formation of new neurons; occurs in adult hippocampal dentate gyrus; enhanced by \
exercise and learning.",
    ),
    (
        "consolidation",
        "Memory stabilization process; synaptic (immediate) and systems-level (gradual, \
sleep-dependent) phases.",
    ),
    (
        "bdnf",
        "Brain-derived neurotrophic factor: protein supporting neuron survival, growth, \
plasticity; increased by exercise.",
    ),
    // Trastornos
    (
        "adhd",
        "Attention-deficit/hyperactivity disorder: inattention, hyperactivity, impulsivity; \
frontostriatal dysfunction, dopamine deficits.",
    ),
    (
        "parkinson's disease",
        "Neurodegenerative disorder from substantia nigra dopamine loss; tremor, rigidity, \
bradykinesia; treated with L-DOPA.",
    ),
    (
        "alzheimer's disease",
        "Most common dementia; amyloid plaques, tau tangles, cholinergic deficit; \
progressive memory and cognitive loss.",
    ),
    (
        "depression",
        "Major depressive disorder: persistent low mood, anhedonia; monoamine deficiency, \
hippocampal atrophy; treated with SSRIs, therapy.",
    ),
    (
        "schizophrenia",
        "Psychotic disorder with hallucinations, delusions, cognitive deficits; dopamine \
hypothesis; treated with antipsychotics.",
    ),
    (
        "ptsd",
        "Post-traumatic stress disorder: intrusive memories, hyperarousal, avoidance after \
trauma; amygdala hyperactivity; treated with exposure therapy.",
    ),
    (
        "ocd",
        "Obsessive-compulsive disorder: intrusive thoughts (obsessions), repetitive \
behaviors (compulsions); cortico-striato-thalamic dysfunction.",
    ),
    // Redes y conceptos
    (
        "default mode network",
        "Brain network active at rest; includes medial PFC, posterior cingulate; linked to \
mind-wandering, self-reference, memory.",
    ),
    (
        "executive functions",
        "High-level cognitive processes: working memory, cognitive flexibility, inhibitory \
control; depend on prefrontal cortex.",
    ),
    (
        "working memory",
        "Temporary storage and manipulation of information; prefrontal-parietal networks; \
central executive system.",
    ),
    (
        "arcuate fasciculus",
        "White matter tract connecting temporal language regions (Wernicke) to frontal \
(Broca) for language processing.",
    ),
    (
        "hpa axis",
        "Hypothalamic-pituitary-adrenal axis: stress response system; dysregulation linked \
to depression, anxiety, PTSD.",
    ),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_is_case_insensitive() {
        assert!(lookup("Dopamine").is_some());
        assert!(lookup("HIPPOCAMPUS").is_some());
        assert!(lookup("flux capacitor").is_none());
    }

    #[test]
    fn trigger_phrase_captures_following_words() {
        assert_eq!(extract_term("define working memory"), Some("working memory".to_string()));
        // El apóstrofo corta la captura en el nombre del término.
        assert_eq!(
            extract_term("What is dopamine's role?"),
            Some("dopamine".to_string())
        );
    }

    #[test]
    fn falls_back_to_longest_known_key() {
        // Sin frase disparadora, gana la clave más larga presente.
        assert_eq!(
            extract_term("damage to the prefrontal cortex"),
            Some("prefrontal cortex".to_string())
        );
    }

    #[test]
    fn keys_with_apostrophes_are_findable() {
        assert_eq!(
            extract_term("my grandmother has parkinson's disease symptoms"),
            Some("parkinson's disease".to_string())
        );
    }

    #[test]
    fn word_boundaries_are_respected() {
        // "pet" no debe coincidir dentro de "petition".
        assert!(!contains_word("a petition about rights", "pet"));
        assert!(contains_word("a pet scan result", "pet"));
    }

    #[test]
    fn no_candidate_yields_none() {
        assert_eq!(extract_term("zzz qqq"), None);
    }
}
