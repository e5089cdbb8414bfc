//! Índice vectorial TF-IDF sobre el corpus (pasajes + preguntas FAQ).
//!
//! Flujo de construcción:
//!   1. Tokenizar cada texto en unigramas y bigramas (alfabéticos, en
//!      minúsculas, sin stop words).
//!   2. Vocabulario conjunto sobre pasajes ∪ preguntas FAQ, de modo que ambos
//!      comparten un mismo espacio de coordenadas.
//!   3. IDF suavizado con logaritmo natural: idf(t) = ln((1+N)/(1+df(t))) + 1.
//!   4. Vector TF×IDF por texto, normalizado L2 para comparación por coseno.
//!   5. Particionar la matriz en filas de pasajes y filas de FAQ, preservando
//!      el orden original.
//!
//! El vocabulario y los pesos quedan congelados tras la construcción: las
//! consultas posteriores se proyectan en este espacio fijo y los términos no
//! vistos aportan peso cero.

use regex::Regex;
use std::collections::HashMap;
use std::sync::LazyLock;

use crate::stopwords;

static TOKEN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[a-z]{2,}").expect("regex de token inválida"));

/// Vector disperso: pares (id de término, peso) ordenados por id.
pub type SparseVec = Vec<(usize, f64)>;

/// Espacio vectorial TF-IDF congelado.
pub struct TfidfIndex {
    vocab: HashMap<String, usize>,
    idf: Vec<f64>,
    passage_vectors: Vec<SparseVec>,
    faq_vectors: Vec<SparseVec>,
}

impl TfidfIndex {
    /// Construye el índice sobre los textos de pasajes y de preguntas FAQ.
    /// Un corpus vacío es válido y produce un índice que puntúa todo a cero.
    pub fn build(passage_texts: &[&str], faq_texts: &[&str]) -> Self {
        // 1) Términos por documento del corpus combinado.
        let all_terms: Vec<Vec<String>> = passage_texts
            .iter()
            .chain(faq_texts.iter())
            .map(|text| extract_terms(text))
            .collect();

        // 2) Vocabulario conjunto + frecuencia documental.
        let mut vocab: HashMap<String, usize> = HashMap::new();
        let mut df: Vec<usize> = Vec::new();
        for terms in &all_terms {
            let mut seen: Vec<usize> = Vec::new();
            for term in terms {
                let id = match vocab.get(term) {
                    Some(&id) => id,
                    None => {
                        let id = vocab.len();
                        vocab.insert(term.clone(), id);
                        df.push(0);
                        id
                    }
                };
                if !seen.contains(&id) {
                    df[id] += 1;
                    seen.push(id);
                }
            }
        }

        // 3) IDF suavizado sobre el total combinado de documentos.
        let n = all_terms.len();
        let idf: Vec<f64> = df
            .iter()
            .map(|&d| ((1.0 + n as f64) / (1.0 + d as f64)).ln() + 1.0)
            .collect();

        // 4) Vector TF×IDF normalizado por documento.
        let mut vectors: Vec<SparseVec> = all_terms
            .iter()
            .map(|terms| weigh_terms(terms, &vocab, &idf))
            .collect();

        // 5) Partición: primero las filas de pasajes, después las de FAQ.
        let faq_vectors = vectors.split_off(passage_texts.len());

        Self {
            vocab,
            idf,
            passage_vectors: vectors,
            faq_vectors,
        }
    }

    /// Proyecta una consulta libre en el espacio congelado. Los términos
    /// ausentes del vocabulario se descartan; una consulta sin solapamiento
    /// produce el vector nulo.
    pub fn project(&self, query: &str) -> SparseVec {
        let terms = extract_terms(query);
        weigh_terms(&terms, &self.vocab, &self.idf)
    }

    pub fn passage_vectors(&self) -> &[SparseVec] {
        &self.passage_vectors
    }

    pub fn faq_vectors(&self) -> &[SparseVec] {
        &self.faq_vectors
    }

    pub fn vocab_len(&self) -> usize {
        self.vocab.len()
    }
}

/// Similitud coseno entre dos vectores dispersos ya normalizados L2.
/// Definida como 0 cuando cualquiera de los dos es el vector nulo.
pub fn cosine(a: &SparseVec, b: &SparseVec) -> f64 {
    let mut dot = 0.0;
    let (mut i, mut j) = (0, 0);
    while i < a.len() && j < b.len() {
        match a[i].0.cmp(&b[j].0) {
            std::cmp::Ordering::Less => i += 1,
            std::cmp::Ordering::Greater => j += 1,
            std::cmp::Ordering::Equal => {
                dot += a[i].1 * b[j].1;
                i += 1;
                j += 1;
            }
        }
    }
    dot
}

/// Unigramas y bigramas de tokens alfabéticos en minúsculas; las stop words
/// se eliminan antes de formar los bigramas, así que un bigrama puede unir
/// tokens no adyacentes en el texto original.
fn extract_terms(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    let tokens: Vec<&str> = TOKEN_RE
        .find_iter(&lowered)
        .map(|m| m.as_str())
        .filter(|t| !stopwords::is_stop_word(t))
        .collect();

    let mut terms: Vec<String> = tokens.iter().map(|t| (*t).to_string()).collect();
    for pair in tokens.windows(2) {
        terms.push(format!("{} {}", pair[0], pair[1]));
    }
    terms
}

/// TF crudo × IDF sobre el vocabulario congelado, normalizado L2.
fn weigh_terms(terms: &[String], vocab: &HashMap<String, usize>, idf: &[f64]) -> SparseVec {
    let mut tf: HashMap<usize, f64> = HashMap::new();
    for term in terms {
        if let Some(&id) = vocab.get(term) {
            *tf.entry(id).or_insert(0.0) += 1.0;
        }
    }

    let mut vector: SparseVec = tf
        .into_iter()
        .map(|(id, count)| (id, count * idf[id]))
        .collect();
    vector.sort_by_key(|&(id, _)| id);

    let norm = vector.iter().map(|&(_, w)| w * w).sum::<f64>().sqrt();
    if norm > 0.0 {
        for entry in &mut vector {
            entry.1 /= norm;
        }
    }
    vector
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn terms_include_unigrams_and_bigrams() {
        let terms = extract_terms("The hippocampus supports spatial memory");
        assert!(terms.contains(&"hippocampus".to_string()));
        assert!(terms.contains(&"spatial memory".to_string()));
        // "the" es stop word y el bigrama salta sobre ella.
        assert!(terms.contains(&"hippocampus supports".to_string()));
        assert!(!terms.iter().any(|t| t.contains("the")));
    }

    #[test]
    fn idf_follows_smoothed_formula() {
        let index = TfidfIndex::build(&["dopamine reward", "dopamine motor"], &[]);
        let &dopamine_id = index.vocab.get("dopamine").unwrap();
        let &reward_id = index.vocab.get("reward").unwrap();
        // N = 2; dopamine aparece en ambos, reward sólo en uno.
        let expected_dopamine = (3.0_f64 / 3.0).ln() + 1.0;
        let expected_reward = (3.0_f64 / 2.0).ln() + 1.0;
        assert!((index.idf[dopamine_id] - expected_dopamine).abs() < 1e-12);
        assert!((index.idf[reward_id] - expected_reward).abs() < 1e-12);
    }

    #[test]
    fn vectors_are_l2_normalized() {
        let index = TfidfIndex::build(&["dopamine reward motivation"], &["reward pathways"]);
        for v in index.passage_vectors().iter().chain(index.faq_vectors()) {
            let norm: f64 = v.iter().map(|&(_, w)| w * w).sum::<f64>().sqrt();
            assert!((norm - 1.0).abs() < 1e-9);
        }
    }

    #[test]
    fn unseen_query_terms_contribute_nothing() {
        let index = TfidfIndex::build(&["dopamine reward"], &[]);
        let qv = index.project("serotonin mood");
        assert!(qv.is_empty());
        assert_eq!(cosine(&qv, &index.passage_vectors()[0]), 0.0);
    }

    #[test]
    fn empty_corpus_yields_empty_index() {
        let index = TfidfIndex::build(&[], &[]);
        assert_eq!(index.vocab_len(), 0);
        assert!(index.project("anything at all").is_empty());
    }

    #[test]
    fn all_stopword_corpus_scores_zero() {
        let index = TfidfIndex::build(&["the of and", "is was were"], &[]);
        assert_eq!(index.vocab_len(), 0);
        let qv = index.project("the of");
        for pv in index.passage_vectors() {
            assert_eq!(cosine(&qv, pv), 0.0);
        }
    }

    #[test]
    fn identical_texts_have_unit_similarity() {
        let index = TfidfIndex::build(&["dopamine regulates reward and motivation"], &[]);
        let qv = index.project("dopamine regulates reward and motivation");
        let sim = cosine(&qv, &index.passage_vectors()[0]);
        assert!((sim - 1.0).abs() < 1e-9);
    }

    #[test]
    fn partition_preserves_order_and_counts() {
        let index = TfidfIndex::build(&["alpha beta", "gamma delta"], &["epsilon zeta"]);
        assert_eq!(index.passage_vectors().len(), 2);
        assert_eq!(index.faq_vectors().len(), 1);
    }
}
