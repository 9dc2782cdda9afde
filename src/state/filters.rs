//! Client-side filtering of the loaded transaction list.

#[cfg(test)]
#[path = "filters_test.rs"]
mod filters_test;

use uuid::Uuid;

use crate::net::types::{TipoTransacao, Transacao};

/// Active filters on the transactions page. Every set predicate must
/// match; unset predicates pass everything.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FiltroTransacoes {
    pub tipo: Option<TipoTransacao>,
    pub categoria_id: Option<Uuid>,
    pub plataforma_id: Option<Uuid>,
    /// Inclusive lower bound, ISO `AAAA-MM-DD`.
    pub data_inicio: Option<String>,
    /// Inclusive upper bound, ISO `AAAA-MM-DD`.
    pub data_fim: Option<String>,
}

impl FiltroTransacoes {
    /// No predicate set.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Whether `transacao` passes all set predicates.
    ///
    /// Transactions without a date are excluded whenever either date
    /// bound is set. ISO dates compare lexicographically, so plain
    /// string comparison gives inclusive `[inicio, fim]` semantics.
    pub fn matches(&self, transacao: &Transacao) -> bool {
        if self.data_inicio.is_some() || self.data_fim.is_some() {
            let Some(data) = transacao.data_transacao.as_deref() else {
                return false;
            };
            if let Some(inicio) = self.data_inicio.as_deref() {
                if data < inicio {
                    return false;
                }
            }
            if let Some(fim) = self.data_fim.as_deref() {
                if data > fim {
                    return false;
                }
            }
        }

        self.tipo.is_none_or(|tipo| transacao.tipo == tipo)
            && self
                .categoria_id
                .is_none_or(|id| transacao.categoria.as_ref().is_some_and(|c| c.id == id))
            && self
                .plataforma_id
                .is_none_or(|id| transacao.plataforma.as_ref().is_some_and(|p| p.id == id))
    }

    /// Linear scan over the loaded list.
    pub fn aplicar(&self, transacoes: &[Transacao]) -> Vec<Transacao> {
        transacoes
            .iter()
            .filter(|t| self.matches(t))
            .cloned()
            .collect()
    }
}
