use serde::{Deserialize, Serialize};
use std::collections::hash_map::Entry;

/// A streamed citation record attached to an assistant answer. Any subset of
/// fields may be present depending on what the retrieval layer knew.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Citation {
    #[serde(default, alias = "docId", skip_serializing_if = "Option::is_none")]
    pub doc_id: Option<String>,
    #[serde(default, alias = "chunkId", skip_serializing_if = "Option::is_none")]
    pub chunk_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub snippet: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub anchor: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub evidence: Option<String>,
}

/// The composite identity used for deduplication: document coordinates when a
/// doc id exists, the URL otherwise, and finally the citation text itself.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
enum CitationKey {
    Doc {
        doc_id: String,
        chunk_id: String,
        page: Option<u32>,
    },
    Url(String),
    Text(String),
    /// A record with no identifying fields at all; kept as-is.
    Opaque(usize),
}

fn citation_key(citation: &Citation, index: usize) -> CitationKey {
    if let Some(doc_id) = non_blank(citation.doc_id.as_deref()) {
        return CitationKey::Doc {
            doc_id,
            chunk_id: non_blank(citation.chunk_id.as_deref()).unwrap_or_default(),
            page: citation.page,
        };
    }
    if let Some(url) = non_blank(citation.url.as_deref()) {
        return CitationKey::Url(url);
    }
    if let Some(text) = non_blank(citation.snippet.as_deref())
        .or_else(|| non_blank(citation.title.as_deref()))
    {
        return CitationKey::Text(text);
    }
    CitationKey::Opaque(index)
}

fn non_blank(value: Option<&str>) -> Option<String> {
    value.map(str::trim).filter(|s| !s.is_empty()).map(str::to_string)
}

/// Deduplicates streamed citations in first-seen order, widening each kept
/// record with the best available fields across its duplicates: the longest
/// snippet wins, and missing anchor/title/evidence/url/page fields are filled
/// from later sightings.
pub fn merge_citations<I>(citations: I) -> Vec<Citation>
where
    I: IntoIterator<Item = Citation>,
{
    let mut order: Vec<CitationKey> = Vec::new();
    let mut merged: ahash::AHashMap<CitationKey, Citation> = ahash::AHashMap::new();

    for (index, incoming) in citations.into_iter().enumerate() {
        let key = citation_key(&incoming, index);
        match merged.entry(key.clone()) {
            Entry::Vacant(slot) => {
                order.push(key);
                slot.insert(incoming);
            }
            Entry::Occupied(mut slot) => widen(slot.get_mut(), incoming),
        }
    }

    order
        .into_iter()
        .filter_map(|key| merged.remove(&key))
        .collect()
}

fn widen(existing: &mut Citation, incoming: Citation) {
    let longer = |current: &Option<String>, candidate: &Option<String>| {
        candidate.as_deref().map(str::len).unwrap_or(0)
            > current.as_deref().map(str::len).unwrap_or(0)
    };

    if longer(&existing.snippet, &incoming.snippet) {
        existing.snippet = incoming.snippet;
    }
    if longer(&existing.evidence, &incoming.evidence) {
        existing.evidence = incoming.evidence;
    }
    fill(&mut existing.doc_id, incoming.doc_id);
    fill(&mut existing.chunk_id, incoming.chunk_id);
    fill(&mut existing.url, incoming.url);
    fill(&mut existing.title, incoming.title);
    fill(&mut existing.anchor, incoming.anchor);
    if existing.page.is_none() {
        existing.page = incoming.page;
    }
}

fn fill(slot: &mut Option<String>, candidate: Option<String>) {
    if slot.as_deref().map(str::trim).filter(|s| !s.is_empty()).is_none() {
        if let Some(value) = candidate.filter(|s| !s.trim().is_empty()) {
            *slot = Some(value);
        }
    }
}
