use uuid::Uuid;

use super::*;
use crate::net::types::{Categoria, Plataforma};

fn transacao(tipo: TipoTransacao, data: Option<&str>) -> Transacao {
    Transacao {
        id: Uuid::new_v4(),
        tipo,
        valor: 50.0,
        data_transacao: data.map(ToOwned::to_owned),
        ..Transacao::default()
    }
}

fn categoria(id: Uuid) -> Categoria {
    Categoria {
        id,
        nome: "Corridas".to_owned(),
        tipo: TipoTransacao::Receita,
        cor: None,
        icone: None,
        padrao: false,
        ativo: true,
    }
}

fn plataforma(id: Uuid) -> Plataforma {
    Plataforma {
        id,
        nome: "99".to_owned(),
        tipo: "driver".to_owned(),
        cor: None,
        comissao_percentual: None,
        ativo: true,
    }
}

// =============================================================
// Date window
// =============================================================

#[test]
fn empty_filter_matches_everything() {
    let filtro = FiltroTransacoes::default();
    assert!(filtro.is_empty());
    assert!(filtro.matches(&transacao(TipoTransacao::Receita, Some("2024-03-10"))));
    assert!(filtro.matches(&transacao(TipoTransacao::Despesa, None)));
}

#[test]
fn date_window_is_inclusive_on_both_bounds() {
    let filtro = FiltroTransacoes {
        data_inicio: Some("2024-03-01".to_owned()),
        data_fim: Some("2024-03-31".to_owned()),
        ..FiltroTransacoes::default()
    };

    assert!(filtro.matches(&transacao(TipoTransacao::Receita, Some("2024-03-01"))));
    assert!(filtro.matches(&transacao(TipoTransacao::Receita, Some("2024-03-15"))));
    assert!(filtro.matches(&transacao(TipoTransacao::Receita, Some("2024-03-31"))));
    assert!(!filtro.matches(&transacao(TipoTransacao::Receita, Some("2024-02-29"))));
    assert!(!filtro.matches(&transacao(TipoTransacao::Receita, Some("2024-04-01"))));
}

#[test]
fn dateless_transactions_are_excluded_when_any_bound_is_set() {
    let so_inicio = FiltroTransacoes {
        data_inicio: Some("2024-03-01".to_owned()),
        ..FiltroTransacoes::default()
    };
    let so_fim = FiltroTransacoes {
        data_fim: Some("2024-03-31".to_owned()),
        ..FiltroTransacoes::default()
    };

    assert!(!so_inicio.matches(&transacao(TipoTransacao::Receita, None)));
    assert!(!so_fim.matches(&transacao(TipoTransacao::Receita, None)));
}

#[test]
fn single_bound_windows_are_half_open() {
    let filtro = FiltroTransacoes {
        data_inicio: Some("2024-03-01".to_owned()),
        ..FiltroTransacoes::default()
    };

    assert!(filtro.matches(&transacao(TipoTransacao::Receita, Some("2030-01-01"))));
    assert!(!filtro.matches(&transacao(TipoTransacao::Receita, Some("2024-02-29"))));
}

// =============================================================
// Discrete predicates
// =============================================================

#[test]
fn tipo_predicate_filters_by_kind() {
    let filtro = FiltroTransacoes {
        tipo: Some(TipoTransacao::Despesa),
        ..FiltroTransacoes::default()
    };

    assert!(filtro.matches(&transacao(TipoTransacao::Despesa, Some("2024-03-10"))));
    assert!(!filtro.matches(&transacao(TipoTransacao::Receita, Some("2024-03-10"))));
}

#[test]
fn categoria_predicate_requires_matching_embedded_category() {
    let alvo = Uuid::new_v4();
    let filtro = FiltroTransacoes {
        categoria_id: Some(alvo),
        ..FiltroTransacoes::default()
    };

    let mut com_alvo = transacao(TipoTransacao::Receita, Some("2024-03-10"));
    com_alvo.categoria = Some(categoria(alvo));
    let mut com_outra = transacao(TipoTransacao::Receita, Some("2024-03-10"));
    com_outra.categoria = Some(categoria(Uuid::new_v4()));
    let sem_categoria = transacao(TipoTransacao::Receita, Some("2024-03-10"));

    assert!(filtro.matches(&com_alvo));
    assert!(!filtro.matches(&com_outra));
    assert!(!filtro.matches(&sem_categoria));
}

#[test]
fn plataforma_predicate_requires_matching_embedded_platform() {
    let alvo = Uuid::new_v4();
    let filtro = FiltroTransacoes {
        plataforma_id: Some(alvo),
        ..FiltroTransacoes::default()
    };

    let mut com_alvo = transacao(TipoTransacao::Receita, Some("2024-03-10"));
    com_alvo.plataforma = Some(plataforma(alvo));

    assert!(filtro.matches(&com_alvo));
    assert!(!filtro.matches(&transacao(TipoTransacao::Receita, Some("2024-03-10"))));
}

#[test]
fn aplicar_keeps_order_and_combines_predicates() {
    let alvo = Uuid::new_v4();
    let mut a = transacao(TipoTransacao::Receita, Some("2024-03-05"));
    a.plataforma = Some(plataforma(alvo));
    let b = transacao(TipoTransacao::Despesa, Some("2024-03-06"));
    let mut c = transacao(TipoTransacao::Receita, Some("2024-03-20"));
    c.plataforma = Some(plataforma(alvo));
    let fora_da_janela = {
        let mut t = transacao(TipoTransacao::Receita, Some("2024-04-02"));
        t.plataforma = Some(plataforma(alvo));
        t
    };

    let filtro = FiltroTransacoes {
        tipo: Some(TipoTransacao::Receita),
        plataforma_id: Some(alvo),
        data_inicio: Some("2024-03-01".to_owned()),
        data_fim: Some("2024-03-31".to_owned()),
        ..FiltroTransacoes::default()
    };

    let lista = [a.clone(), b, c.clone(), fora_da_janela];
    let filtradas = filtro.aplicar(&lista);
    assert_eq!(filtradas, vec![a, c]);
}
