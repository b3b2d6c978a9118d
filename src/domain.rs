use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Registration categories, one database table each.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub enum Category {
    #[serde(rename = "abrigo")]
    Shelter,
    #[serde(rename = "doacao")]
    DonationPoint,
    #[serde(rename = "desaparecido")]
    MissingPerson,
    #[serde(rename = "alimentacao")]
    FeedingPoint,
    #[serde(rename = "comunidade")]
    Community,
    #[serde(rename = "voluntario")]
    Volunteer,
    #[serde(rename = "vaquinha")]
    Fundraiser,
    #[serde(rename = "doador")]
    Donor,
}

impl Category {
    pub const ALL: [Category; 8] = [
        Category::Shelter,
        Category::DonationPoint,
        Category::MissingPerson,
        Category::FeedingPoint,
        Category::Community,
        Category::Volunteer,
        Category::Fundraiser,
        Category::Donor,
    ];

    pub fn slug(self) -> &'static str {
        match self {
            Category::Shelter => "abrigo",
            Category::DonationPoint => "doacao",
            Category::MissingPerson => "desaparecido",
            Category::FeedingPoint => "alimentacao",
            Category::Community => "comunidade",
            Category::Volunteer => "voluntario",
            Category::Fundraiser => "vaquinha",
            Category::Donor => "doador",
        }
    }

    pub fn from_slug(slug: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|c| c.slug() == slug)
    }

    /// Display label shown in step context, summaries and cards.
    pub fn label(self) -> &'static str {
        match self {
            Category::Shelter => "🏠 Abrigo",
            Category::DonationPoint => "📦 Ponto de Doação",
            Category::MissingPerson => "🔍 Pessoa Desaparecida",
            Category::FeedingPoint => "🍽️ Ponto de Alimentação",
            Category::Community => "🏘️ Comunidade / Bairro",
            Category::Volunteer => "🙋 Oferecer Ajuda",
            Category::Fundraiser => "🤝 Vaquinha",
            Category::Donor => "🎁 Doador",
        }
    }
}

/// Wire categories accepted by the moderation endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum ModerationKind {
    #[serde(rename = "vaquinha")]
    Vaquinha,
    #[serde(rename = "doacao_pix")]
    DoacaoPix,
}

impl ModerationKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ModerationKind::Vaquinha => "vaquinha",
            ModerationKind::DoacaoPix => "doacao_pix",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "vaquinha" => Some(ModerationKind::Vaquinha),
            "doacao_pix" => Some(ModerationKind::DoacaoPix),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ModerationKind::Vaquinha => "Vaquinha",
            ModerationKind::DoacaoPix => "Ponto de Doação com PIX",
        }
    }
}

/// Placeholder option values the forms use for "no PIX"; never persisted.
pub const SENTINELS: &[&str] = &["— Não recebe PIX —", "— Não informar PIX —"];

/// Form field name -> column name. Fields absent here keep their name.
pub const FIELD_RENAMES: &[(&str, &str)] = &[
    ("local", "nome_local"),
    ("whatsapp", "telefone"),
    ("campanha", "nome_campanha"),
    ("link_vaquinha", "link"),
    ("habilidades", "habilidade"),
    ("tel_informante", "informante_tel"),
    ("observacoes", "obs"),
];

/// Columns that hold `text[]`; single values get wrapped on submission.
pub const ARRAY_FIELDS: &[&str] = &[
    "recursos",
    "necessidades",
    "nao_precisa",
    "aceita",
    "refeicao",
    "habilidade",
    "itens",
];

/// Column name -> human label, shared by summaries, cards and the email.
pub const FIELD_LABELS: &[(&str, &str)] = &[
    ("nome_local", "Local"),
    ("nome_pessoa", "Nome da pessoa"),
    ("nome", "Nome"),
    ("nome_campanha", "Campanha"),
    ("responsavel", "Responsável"),
    ("telefone", "Telefone/WhatsApp"),
    ("endereco", "Endereço"),
    ("vagas", "Vagas disponíveis"),
    ("recursos", "Recursos disponíveis"),
    ("animais", "Aceita animais"),
    ("necessidades", "Necessidades AGORA"),
    ("nao_precisa", "NÃO precisa"),
    ("prioridade", "Prioridade"),
    ("horario", "Horário"),
    ("aceita", "O que aceita"),
    ("pix_tipo", "Tipo da chave PIX"),
    ("pix_chave", "Chave PIX"),
    ("pix_titular", "Titular PIX"),
    ("pix_qrcode_url", "QR Code PIX"),
    ("refeicao", "Tipo de refeição"),
    ("voluntarios", "Precisa voluntários"),
    ("capacidade", "Capacidade"),
    ("familias", "Famílias afetadas"),
    ("descricao", "Descrição"),
    ("ultima_vez", "Última vez visto"),
    ("local_visto", "Local visto"),
    ("saude", "Condição de saúde"),
    ("informante_nome", "Informante"),
    ("informante_tel", "Tel. informante"),
    ("relacao", "Relação"),
    ("idade", "Idade"),
    ("bairro", "Bairro"),
    ("veiculo", "Veículo"),
    ("habilidade", "Habilidades"),
    ("disponibilidade", "Disponibilidade"),
    ("itens", "Itens oferecidos"),
    ("link", "Link da campanha"),
    ("obs", "Observações"),
];

pub fn is_sentinel(value: &str) -> bool {
    value.is_empty() || SENTINELS.contains(&value)
}

/// Render one stored value for display; sentinel strings and elements are
/// dropped, arrays joined with ", ".
pub fn display_value(value: &serde_json::Value) -> Option<String> {
    use serde_json::Value;
    match value {
        Value::String(s) if is_sentinel(s) => None,
        Value::String(s) => Some(s.clone()),
        Value::Array(items) => {
            let parts: Vec<&str> = items
                .iter()
                .filter_map(Value::as_str)
                .filter(|s| !is_sentinel(s))
                .collect();
            if parts.is_empty() {
                None
            } else {
                Some(parts.join(", "))
            }
        }
        Value::Null => None,
        other => Some(other.to_string()),
    }
}

pub fn field_label(column: &str) -> &str {
    FIELD_LABELS
        .iter()
        .find(|(k, _)| *k == column)
        .map(|(_, l)| *l)
        .unwrap_or(column)
}

pub fn rename_field(field: &str) -> &str {
    FIELD_RENAMES
        .iter()
        .find(|(from, _)| *from == field)
        .map(|(_, to)| *to)
        .unwrap_or(field)
}

/// Startup consistency check of the static tables (fail-fast, see main).
pub fn validate_tables() -> anyhow::Result<()> {
    for (from, to) in FIELD_RENAMES {
        if from == to {
            anyhow::bail!("FIELD_RENAMES maps '{}' to itself", from);
        }
        if FIELD_RENAMES.iter().filter(|(f, _)| f == from).count() > 1 {
            anyhow::bail!("FIELD_RENAMES has duplicate source '{}'", from);
        }
        if FIELD_LABELS.iter().all(|(k, _)| k != to) {
            anyhow::bail!("rename target '{}' has no label", to);
        }
    }
    for name in ARRAY_FIELDS {
        if FIELD_LABELS.iter().all(|(k, _)| k != name) {
            anyhow::bail!("array field '{}' has no label", name);
        }
    }
    for (column, _) in FIELD_LABELS {
        if FIELD_LABELS.iter().filter(|(k, _)| k == column).count() > 1 {
            anyhow::bail!("FIELD_LABELS has duplicate column '{}'", column);
        }
    }
    Ok(())
}
