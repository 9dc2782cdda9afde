use super::*;

// =============================================================
// Wire decoding
// =============================================================

#[test]
fn login_response_decodes_token_and_user() {
    let json = r#"{
        "access_token": "t1",
        "token_type": "bearer",
        "user": {
            "id": "5f0c70f5-3b51-4cde-9c3f-3f4c9b1f6a01",
            "nome": "Ana",
            "email": "a@b.com",
            "verificado": true,
            "ativo": true
        }
    }"#;

    let resposta: LoginResponse = serde_json::from_str(json).expect("login response");
    assert_eq!(resposta.access_token, "t1");
    assert_eq!(resposta.user.email.as_deref(), Some("a@b.com"));
    assert!(resposta.user.ativo);
    // Fields the server did not send default instead of failing.
    assert!(resposta.user.bio.is_none());
    assert!(resposta.user.timezone.is_none());
}

#[test]
fn tipo_transacao_uses_lowercase_wire_values() {
    assert_eq!(
        serde_json::to_string(&TipoTransacao::Receita).unwrap(),
        "\"receita\""
    );
    let tipo: TipoTransacao = serde_json::from_str("\"despesa\"").unwrap();
    assert_eq!(tipo, TipoTransacao::Despesa);
}

#[test]
fn transacao_tolerates_missing_optional_fields() {
    let json = r#"{
        "id": "5f0c70f5-3b51-4cde-9c3f-3f4c9b1f6a02",
        "tipo": "receita",
        "valor": 52.5
    }"#;

    let t: Transacao = serde_json::from_str(json).expect("transacao");
    assert_eq!(t.tipo, TipoTransacao::Receita);
    assert!((t.valor - 52.5).abs() < f64::EPSILON);
    assert!(t.categoria.is_none());
    assert!(t.data_transacao.is_none());
}

#[test]
fn nova_transacao_omits_unset_fields() {
    let nova = NovaTransacao {
        tipo: TipoTransacao::Despesa,
        valor: 80.0,
        descricao: Some("Combustível".to_owned()),
        ..NovaTransacao::default()
    };

    let json = serde_json::to_value(&nova).unwrap();
    assert_eq!(json["tipo"], "despesa");
    assert_eq!(json["descricao"], "Combustível");
    // Unset optionals must not appear in the payload at all.
    assert!(json.get("categoria_id").is_none());
    assert!(json.get("km_percorridos").is_none());
}

#[test]
fn grafico_mensal_decodes_row_array() {
    // The endpoint answers with an array of per-month rows.
    let json = r#"[
        {"mes": "Dez/24", "receitas": 3200.0, "despesas": 1100.0, "saldo": 2100.0, "km_total": 950.0},
        {"mes": "Jan/25", "receitas": 2800.5, "despesas": 900.0, "saldo": 1900.5, "km_total": 820.0}
    ]"#;

    let meses: Vec<GraficoMensalRow> = serde_json::from_str(json).expect("grafico mensal");
    assert_eq!(meses.len(), 2);
    assert_eq!(meses[0].mes, "Dez/24");
    assert!((meses[1].receitas - 2800.5).abs() < f64::EPSILON);
    assert!((meses[1].saldo - 1900.5).abs() < f64::EPSILON);
}

#[test]
fn grafico_mensal_row_tolerates_missing_derived_fields() {
    let json = r#"{"mes": "Fev/25", "receitas": 10.0, "despesas": 4.0}"#;

    let mes: GraficoMensalRow = serde_json::from_str(json).expect("row");
    assert_eq!(mes.mes, "Fev/25");
    assert!((mes.saldo - 0.0).abs() < f64::EPSILON);
    assert!((mes.km_total - 0.0).abs() < f64::EPSILON);
}

#[test]
fn resumo_plataformas_row_decodes_backend_shape() {
    let json = r##"{
        "nome": "99",
        "cor": "#28a745",
        "receita": 1200.0,
        "km": 400.0,
        "corridas": 85,
        "valor_por_km": 3.0,
        "participacao": 40.5
    }"##;

    let resumo: ResumoPlataforma = serde_json::from_str(json).expect("resumo");
    assert_eq!(resumo.nome, "99");
    assert_eq!(resumo.corridas, 85);
    assert!((resumo.participacao - 40.5).abs() < f64::EPSILON);
}

#[test]
fn configuracao_usuario_round_trips_only_set_fields() {
    let config = ConfiguracaoUsuario {
        meta_mensal_receita: Some(5000.0),
        notif_email: Some(true),
        ..ConfiguracaoUsuario::default()
    };

    let json = serde_json::to_value(&config).unwrap();
    assert_eq!(json["meta_mensal_receita"], 5000.0);
    assert!(json.get("limite_gasto_diario").is_none());
}
