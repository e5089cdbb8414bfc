//! Recuperación por similitud: proyecta la consulta en el espacio TF-IDF
//! congelado y devuelve los mejores pasajes y entradas FAQ por coseno.

use crate::corpus::{split_passages, Document, FaqEntry, Passage};
use crate::index::{cosine, SparseVec, TfidfIndex};

/// Resultado transitorio de una búsqueda: índice en la lista original y
/// puntuación de coseno en [0, 1].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hit {
    pub index: usize,
    pub score: f64,
}

/// Motor de recuperación. Propietario de los pasajes, las FAQ y el índice
/// construido sobre ambos; inmutable tras la construcción, por lo que las
/// búsquedas concurrentes son seguras sin sincronización.
pub struct Retriever {
    passages: Vec<Passage>,
    faqs: Vec<FaqEntry>,
    index: TfidfIndex,
}

impl Retriever {
    /// Construye el motor: divide los documentos en pasajes y levanta el
    /// índice TF-IDF conjunto sobre pasajes + preguntas FAQ.
    pub fn new(docs: &[Document], faqs: Vec<FaqEntry>) -> Self {
        let passages = split_passages(docs);
        let passage_texts: Vec<&str> = passages.iter().map(|p| p.text.as_str()).collect();
        let faq_texts: Vec<&str> = faqs.iter().map(|f| f.question).collect();
        let index = TfidfIndex::build(&passage_texts, &faq_texts);
        Self {
            passages,
            faqs,
            index,
        }
    }

    /// Devuelve los `top_k` mejores pasajes y las `top_k` mejores FAQ para la
    /// consulta, ordenados por puntuación descendente con empates resueltos
    /// por orden de inserción en el corpus. `top_k` se recorta al tamaño de
    /// cada lista. Una consulta vacía o sin solapamiento produce listas con
    /// puntuación cero, nunca un error.
    pub fn search(&self, query: &str, top_k: usize) -> (Vec<Hit>, Vec<Hit>) {
        let query_vector = self.index.project(query);
        let doc_hits = rank(&query_vector, self.index.passage_vectors(), top_k);
        let faq_hits = rank(&query_vector, self.index.faq_vectors(), top_k);
        (doc_hits, faq_hits)
    }

    pub fn passage(&self, index: usize) -> &Passage {
        &self.passages[index]
    }

    pub fn faq_answer(&self, index: usize) -> &str {
        self.faqs[index].answer
    }

    pub fn passage_count(&self) -> usize {
        self.passages.len()
    }

    pub fn faq_count(&self) -> usize {
        self.faqs.len()
    }
}

/// Puntúa la consulta contra cada vector y se queda con los `top_k` mejores.
/// La ordenación es estable, así que a igual puntuación gana el índice menor.
fn rank(query_vector: &SparseVec, vectors: &[SparseVec], top_k: usize) -> Vec<Hit> {
    let mut hits: Vec<Hit> = vectors
        .iter()
        .enumerate()
        .map(|(index, v)| Hit {
            index,
            score: cosine(query_vector, v),
        })
        .collect();
    hits.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(std::cmp::Ordering::Equal));
    hits.truncate(top_k.min(vectors.len()));
    hits
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_retriever() -> Retriever {
        let docs = vec![
            Document {
                title: "Dopamine",
                text: "dopamine reward motivation motor control",
            },
            Document {
                title: "Serotonin",
                text: "serotonin mood sleep appetite",
            },
            Document {
                title: "Hippocampus",
                text: "hippocampus spatial memory navigation",
            },
        ];
        let faqs = vec![
            FaqEntry {
                question: "what regulates reward",
                answer: "dopamine regulates reward",
            },
            FaqEntry {
                question: "what regulates mood",
                answer: "serotonin regulates mood",
            },
        ];
        Retriever::new(&docs, faqs)
    }

    #[test]
    fn scores_are_non_increasing_and_bounded() {
        let retriever = small_retriever();
        let (doc_hits, faq_hits) = retriever.search("dopamine reward", 3);
        assert!(doc_hits.len() <= 3);
        for hits in [&doc_hits, &faq_hits] {
            for pair in hits.windows(2) {
                assert!(pair[0].score >= pair[1].score);
            }
            for hit in hits.iter() {
                assert!((0.0..=1.0 + 1e-9).contains(&hit.score));
            }
        }
    }

    #[test]
    fn top_k_is_clamped_to_corpus_size() {
        let retriever = small_retriever();
        let (doc_hits, faq_hits) = retriever.search("memory", 50);
        assert_eq!(doc_hits.len(), 3);
        assert_eq!(faq_hits.len(), 2);
    }

    #[test]
    fn no_overlap_query_scores_exactly_zero() {
        let retriever = small_retriever();
        let (doc_hits, faq_hits) = retriever.search("xylophone zygote", 3);
        assert!(doc_hits.iter().all(|h| h.score == 0.0));
        assert!(faq_hits.iter().all(|h| h.score == 0.0));
    }

    #[test]
    fn ties_resolve_by_ascending_index() {
        let retriever = small_retriever();
        // Consulta vacía: todo puntúa cero, el orden debe ser el del corpus.
        let (doc_hits, _) = retriever.search("", 3);
        let order: Vec<usize> = doc_hits.iter().map(|h| h.index).collect();
        assert_eq!(order, vec![0, 1, 2]);
    }

    #[test]
    fn repeated_search_is_idempotent() {
        let retriever = small_retriever();
        let first = retriever.search("spatial memory", 3);
        let second = retriever.search("spatial memory", 3);
        assert_eq!(first.0, second.0);
        assert_eq!(first.1, second.1);
    }

    #[test]
    fn verbatim_passage_query_ranks_itself_first() {
        let retriever = small_retriever();
        let (doc_hits, _) = retriever.search("hippocampus spatial memory navigation", 3);
        assert_eq!(doc_hits[0].index, 2);
        assert!((doc_hits[0].score - 1.0).abs() < 1e-9);
    }

    #[test]
    fn faq_and_passage_scores_share_one_space() {
        let retriever = small_retriever();
        let (_, faq_hits) = retriever.search("what regulates reward", 2);
        assert_eq!(faq_hits[0].index, 0);
        assert!(faq_hits[0].score > 0.9);
    }
}
