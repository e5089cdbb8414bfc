//! Núcleo del asistente: clasifica la intención, consulta el glosario o el
//! motor de recuperación y compone la respuesta final según el modo activo.
//!
//! El asistente es un objeto de servicio construido una vez al arrancar; el
//! índice subyacente es de sólo lectura y la única pieza mutable es el modo y
//! el buffer de memoria reciente (capacidad 6, desalojo FIFO).

use regex::Regex;
use std::collections::VecDeque;
use std::sync::LazyLock;

use crate::glossary;
use crate::intent::{self, Intent};
use crate::retriever::{Hit, Retriever};

/// Umbral de similitud a partir del cual una FAQ se antepone como respuesta
/// directa.
const FAQ_THRESHOLD: f64 = 0.35;
/// Presupuesto de caracteres del fragmento según el modo.
const SNIPPET_TUTOR: usize = 550;
const SNIPPET_CONCISE: usize = 280;
/// Ancho de línea del modo tutor.
const WRAP_WIDTH: usize = 88;
/// Capacidad del buffer de intercambios recientes.
const MEMORY_CAPACITY: usize = 6;

const GREETING: &str = "Hello! I’m your Cognitive Neuroscience Assistant. Ask me about brain \
imaging, memory, experimental design, or stats.";
const FOOTER: &str = "— Ask me to */mode concise* for shorter answers.";

static MODE_CMD_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^\s*/mode\s+(tutor|concise)\s*$").expect("regex de comando inválida")
});

/// Preferencia de formato de la respuesta.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Detallado: fragmentos largos, texto envuelto a 88 columnas y pie.
    Tutor,
    /// Compacto: fragmentos cortos, una sola línea, sin pie.
    Concise,
}

impl Mode {
    /// Interpretación total: cualquier valor que empiece por "c" (ignorando
    /// mayúsculas) es `Concise`; todo lo demás es `Tutor`.
    pub fn parse(value: &str) -> Self {
        if value.trim().to_lowercase().starts_with('c') {
            Mode::Concise
        } else {
            Mode::Tutor
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Tutor => "tutor",
            Mode::Concise => "concise",
        }
    }
}

/// Intercambio (consulta, respuesta) retenido como historial contextual.
/// La lógica de respuesta no lo consulta; se conserva durante la vida del
/// proceso.
#[derive(Debug, Clone)]
pub struct Exchange {
    #[allow(dead_code)]
    pub query: String,
    #[allow(dead_code)]
    pub response: String,
}

/// Asistente conversacional sobre el corpus fijo.
pub struct Assistant {
    retriever: Retriever,
    mode: Mode,
    top_k: usize,
    memory: VecDeque<Exchange>,
}

impl Assistant {
    pub fn new(retriever: Retriever, mode: Mode, top_k: usize) -> Self {
        Self {
            retriever,
            mode,
            top_k: top_k.max(1),
            memory: VecDeque::with_capacity(MEMORY_CAPACITY),
        }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn set_mode(&mut self, value: &str) {
        self.mode = Mode::parse(value);
    }

    pub fn retriever(&self) -> &Retriever {
        &self.retriever
    }

    pub fn memory_len(&self) -> usize {
        self.memory.len()
    }

    /// Responde a un turno de conversación. Siempre devuelve texto; no hay
    /// rutas de error.
    pub fn answer(&mut self, user: &str) -> String {
        // Comando de cambio de modo; otros valores de /mode no coinciden y
        // siguen el flujo normal sin tocar el modo.
        if let Some(caps) = MODE_CMD_RE.captures(user) {
            self.set_mode(&caps[1]);
            return format!("Mode set to {}.", self.mode.as_str());
        }

        if intent::is_greeting(user) {
            return GREETING.to_string();
        }

        let detected = intent::detect(user);

        // Definiciones directas del glosario para `define` / `brain_region`;
        // si no hay término conocido, cae a la recuperación normal.
        if matches!(detected, Intent::Define | Intent::BrainRegion) {
            if let Some(term) = glossary::extract_term(user) {
                if let Some(definition) = glossary::lookup(&term) {
                    return self.format(definition);
                }
            }
        }

        let (doc_hits, faq_hits) = self.retriever.search(user, self.top_k);
        let composed = self.compose_answer(&doc_hits, &faq_hits, detected);
        self.remember(user, &composed);
        composed
    }

    /// Ensambla la respuesta final: FAQ cercana (si supera el umbral), los
    /// mejores pasajes con cita, y un consejo según la intención; después
    /// deduplica, une con línea en blanco y aplica el formato del modo.
    fn compose_answer(&self, doc_hits: &[Hit], faq_hits: &[Hit], detected: Intent) -> String {
        let mut pieces: Vec<String> = Vec::new();

        if let Some(best) = faq_hits.first() {
            if best.score > FAQ_THRESHOLD {
                pieces.push(self.format(self.retriever.faq_answer(best.index)));
            }
        }

        let budget = match self.mode {
            Mode::Tutor => SNIPPET_TUTOR,
            Mode::Concise => SNIPPET_CONCISE,
        };
        for hit in doc_hits {
            let passage = self.retriever.passage(hit.index);
            let snippet = clean_snippet(&passage.text, budget);
            pieces.push(self.format(&format!("{snippet} — *{}*", passage.source_title)));
        }

        pieces.push(self.intent_tip(detected));

        // Deduplicado por texto recortado en minúsculas, conservando la
        // primera aparición; los fragmentos vacíos se descartan.
        let mut unique: Vec<String> = Vec::new();
        let mut seen: Vec<String> = Vec::new();
        for piece in pieces {
            let key = piece.trim().to_lowercase();
            if !key.is_empty() && !seen.contains(&key) {
                unique.push(piece);
                seen.push(key);
            }
        }

        let mut answer = unique.join("\n\n");
        if self.mode == Mode::Tutor {
            answer.push_str("\n\n");
            answer.push_str(FOOTER);
        }
        answer.trim().to_string()
    }

    /// Consejo fijo por intención; `Greet` y `Retrieve` no llevan consejo.
    fn intent_tip(&self, detected: Intent) -> String {
        let tip = match detected {
            Intent::Compare => {
                "Rule of thumb: EEG/MEG → timing; fMRI → spatial maps; combine methods when \
feasible."
            }
            Intent::Design => {
                "Design tip: Pre-register hypotheses, counterbalance orders, and plan power \
(a priori)."
            }
            Intent::Stats => {
                "Stats tip: Control family-wise error (e.g., permutation, cluster-wise, or \
FDR) and report effect sizes."
            }
            Intent::BrainRegion => {
                "Remember: regions work in networks; interpret activations within circuit and \
task context."
            }
            Intent::Neurotransmitter => {
                "Neurotransmitter tip: Consider receptor subtypes, pathways, and interactions \
with other systems for full understanding."
            }
            Intent::Disorder => {
                "Clinical note: Disorders involve multiple brain systems; treatment often \
requires multimodal approaches (medication + therapy + lifestyle)."
            }
            Intent::Treatment => {
                "Treatment reminder: Evidence-based approaches vary by individual; consult \
healthcare professionals for personalized care."
            }
            Intent::Imaging => {
                "Imaging note: Each modality has trade-offs in spatial/temporal resolution; \
multimodal approaches provide complementary insights."
            }
            Intent::Define => "If you want brief definitions only, try */mode concise*.",
            Intent::Greet | Intent::Retrieve => "",
        };
        if tip.is_empty() {
            String::new()
        } else {
            self.format(tip)
        }
    }

    /// Colapsa el espacio en blanco y, en modo tutor, envuelve a 88 columnas.
    fn format(&self, text: &str) -> String {
        let collapsed = collapse_whitespace(text);
        match self.mode {
            Mode::Concise => collapsed,
            Mode::Tutor => wrap(&collapsed, WRAP_WIDTH),
        }
    }

    fn remember(&mut self, query: &str, response: &str) {
        self.memory.push_back(Exchange {
            query: query.to_string(),
            response: response.to_string(),
        });
        while self.memory.len() > MEMORY_CAPACITY {
            self.memory.pop_front();
        }
    }
}

fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Relleno voraz por palabras; las palabras más largas que el ancho quedan en
/// su propia línea.
fn wrap(text: &str, width: usize) -> String {
    let mut lines: Vec<String> = Vec::new();
    let mut current = String::new();
    for word in text.split_whitespace() {
        if current.is_empty() {
            current.push_str(word);
        } else if current.chars().count() + 1 + word.chars().count() <= width {
            current.push(' ');
            current.push_str(word);
        } else {
            lines.push(std::mem::take(&mut current));
            current.push_str(word);
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines.join("\n")
}

/// Colapsa el espacio y recorta al presupuesto de caracteres, añadiendo una
/// elipsis cuando hay corte.
fn clean_snippet(text: &str, max_chars: usize) -> String {
    let collapsed = collapse_whitespace(text);
    if collapsed.chars().count() > max_chars {
        let truncated: String = collapsed.chars().take(max_chars.saturating_sub(1)).collect();
        format!("{truncated}…")
    } else {
        collapsed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::corpus::{self, Document, FaqEntry};

    fn full_assistant(mode: Mode) -> Assistant {
        let retriever = Retriever::new(&corpus::kb_docs(), corpus::faq_entries());
        Assistant::new(retriever, mode, 3)
    }

    #[test]
    fn mode_parse_is_total_and_prefix_based() {
        assert_eq!(Mode::parse("concise"), Mode::Concise);
        assert_eq!(Mode::parse("  Compact  "), Mode::Concise);
        assert_eq!(Mode::parse("C"), Mode::Concise);
        assert_eq!(Mode::parse("tutor"), Mode::Tutor);
        assert_eq!(Mode::parse("whatever"), Mode::Tutor);
        assert_eq!(Mode::parse(""), Mode::Tutor);
    }

    #[test]
    fn mode_command_switches_and_other_values_fall_through() {
        let mut bot = full_assistant(Mode::Tutor);
        assert_eq!(bot.answer("/mode concise"), "Mode set to concise.");
        assert_eq!(bot.mode(), Mode::Concise);
        assert_eq!(bot.answer("/MODE TUTOR"), "Mode set to tutor.");
        assert_eq!(bot.mode(), Mode::Tutor);
        // Valor desconocido: el comando no coincide y el modo no cambia.
        let reply = bot.answer("/mode loud");
        assert_ne!(reply, "Mode set to loud.");
        assert_eq!(bot.mode(), Mode::Tutor);
    }

    #[test]
    fn greeting_short_circuits_retrieval() {
        let mut bot = full_assistant(Mode::Tutor);
        let reply = bot.answer("hello!");
        assert!(reply.starts_with("Hello! I\u{2019}m your Cognitive Neuroscience Assistant"));
        assert_eq!(bot.memory_len(), 0);
    }

    #[test]
    fn glossary_definition_is_returned_directly() {
        let mut bot = full_assistant(Mode::Concise);
        let reply = bot.answer("define neuroplasticity");
        assert!(reply.starts_with("Brain's ability to reorganize"));
        // Respuesta directa del glosario, sin cita de pasaje ni consejo.
        assert!(!reply.contains("— *"));
    }

    #[test]
    fn exact_faq_question_prepends_its_answer() {
        let mut bot = full_assistant(Mode::Concise);
        let reply = bot.answer("How does LTP relate to memory?");
        assert!(reply.starts_with(
            "LTP (long-term potentiation) is a synaptic plasticity mechanism believed to \
underlie learning and memory."
        ));
    }

    #[test]
    fn dopamine_query_gets_neurotransmitter_tip_and_faq_answer() {
        let mut bot = full_assistant(Mode::Concise);
        let reply = bot.answer("What is dopamine's role in the brain?");
        assert!(reply.contains("Dopamine regulates reward, motivation, motor control"));
        assert!(reply.contains("Neurotransmitter tip:"));
    }

    #[test]
    fn concise_output_is_single_line_without_footer() {
        let mut bot = full_assistant(Mode::Concise);
        let reply = bot.answer("What is dopamine's role in the brain?");
        assert!(!reply.contains(FOOTER));
        for fragment in reply.split("\n\n") {
            assert!(!fragment.contains('\n'));
        }
    }

    #[test]
    fn tutor_output_wraps_and_carries_footer() {
        let mut bot = full_assistant(Mode::Tutor);
        let reply = bot.answer("what treatments exist for depression?");
        assert!(reply.ends_with(FOOTER));
        for line in reply.lines() {
            assert!(line.chars().count() <= WRAP_WIDTH, "línea demasiado larga: {line}");
        }
    }

    #[test]
    fn empty_query_still_produces_text() {
        let mut bot = full_assistant(Mode::Tutor);
        let reply = bot.answer("");
        assert!(!reply.is_empty());
    }

    #[test]
    fn snippets_respect_mode_budget() {
        let long = "word ".repeat(400);
        assert!(clean_snippet(&long, SNIPPET_CONCISE).chars().count() <= SNIPPET_CONCISE);
        let cut = clean_snippet(&long, SNIPPET_TUTOR);
        assert!(cut.ends_with('…'));
        assert_eq!(cut.chars().count(), SNIPPET_TUTOR);
    }

    #[test]
    fn duplicate_fragments_keep_first_occurrence() {
        let docs = vec![
            Document {
                title: "Dup",
                text: "dopamine reward circuits",
            },
            Document {
                title: "Dup",
                text: "dopamine reward circuits",
            },
        ];
        let mut bot = Assistant::new(Retriever::new(&docs, Vec::new()), Mode::Concise, 2);
        let reply = bot.answer("dopamine reward");
        assert_eq!(reply.matches("dopamine reward circuits").count(), 1);
    }

    #[test]
    fn memory_is_bounded_with_fifo_eviction() {
        let docs = vec![Document {
            title: "T",
            text: "dopamine reward",
        }];
        let faqs = vec![FaqEntry {
            question: "q",
            answer: "a",
        }];
        let mut bot = Assistant::new(Retriever::new(&docs, faqs), Mode::Concise, 1);
        for i in 0..10 {
            bot.answer(&format!("question number {i}"));
        }
        assert_eq!(bot.memory_len(), MEMORY_CAPACITY);
        assert_eq!(bot.memory.front().unwrap().query, "question number 4");
        assert_eq!(bot.memory.back().unwrap().query, "question number 9");
    }
}
