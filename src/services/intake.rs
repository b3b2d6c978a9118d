use crate::domain::{field_label, is_sentinel, rename_field, Category, ModerationKind, ARRAY_FIELDS};
use crate::error::{AppError, AppResult};
use crate::models::{
    community, donation_point, donor, feeding_point, missing_person, shelter, volunteer,
};
use crate::services::city::CityDirectory;
use crate::services::moderation::ModerationService;
use chrono::Local;
use sea_orm::{ActiveModelTrait, DatabaseConnection};
use serde_json::{Map, Value};

pub struct SubmissionOutcome {
    pub id: i32,
    /// True when the record went through moderation and awaits approval.
    pub pendente: bool,
    /// Plain-text summary for display and sharing.
    pub resumo: String,
}

/// Routes a submitted form to its category table, directly or through
/// moderation.
pub struct IntakeService {
    db: DatabaseConnection,
    cities: CityDirectory,
    moderation: ModerationService,
}

impl IntakeService {
    pub fn new(db: DatabaseConnection, cities: CityDirectory, moderation: ModerationService) -> Self {
        Self {
            db,
            cities,
            moderation,
        }
    }

    pub async fn submit(
        &self,
        categoria: Category,
        cidade: &str,
        campos: &Map<String, Value>,
        image_base64: Option<&str>,
    ) -> AppResult<SubmissionOutcome> {
        let city_id = self.cities.resolve(cidade).await?;

        let normalized = normalize_fields(campos);

        let mut payload = normalized.clone();
        payload.insert("city_id".to_string(), Value::Number(city_id.into()));

        let route = moderation_route(categoria, &payload);
        let (id, pendente) = match route {
            Some(kind) => {
                let id = self
                    .moderation
                    .submit_pending(kind, payload, image_base64)
                    .await?;
                (id, true)
            }
            None => {
                let id = self.insert_direct(categoria, Value::Object(payload)).await?;
                (id, false)
            }
        };

        let resumo = build_summary(
            cidade,
            categoria,
            &normalized,
            Local::now().format("%d/%m/%Y %H:%M").to_string(),
            &self.moderation.config().app_url,
        );

        Ok(SubmissionOutcome {
            id,
            pendente,
            resumo,
        })
    }

    async fn insert_direct(&self, categoria: Category, record: Value) -> AppResult<i32> {
        let id = match categoria {
            Category::Shelter => shelter::ActiveModel::from_json(record)?
                .insert(&self.db)
                .await?
                .id,
            Category::DonationPoint => donation_point::ActiveModel::from_json(record)?
                .insert(&self.db)
                .await?
                .id,
            Category::MissingPerson => missing_person::ActiveModel::from_json(record)?
                .insert(&self.db)
                .await?
                .id,
            Category::FeedingPoint => feeding_point::ActiveModel::from_json(record)?
                .insert(&self.db)
                .await?
                .id,
            Category::Community => community::ActiveModel::from_json(record)?
                .insert(&self.db)
                .await?
                .id,
            Category::Volunteer => volunteer::ActiveModel::from_json(record)?
                .insert(&self.db)
                .await?
                .id,
            Category::Donor => donor::ActiveModel::from_json(record)?
                .insert(&self.db)
                .await?
                .id,
            // Fundraisers always route through moderation; reaching this arm
            // would bypass the pending status.
            Category::Fundraiser => {
                return Err(AppError::Validation(
                    "Vaquinhas passam pela moderação".to_string(),
                ))
            }
        };
        Ok(id)
    }
}

/// Decide whether a normalized payload must go through moderation.
pub fn moderation_route(categoria: Category, payload: &Map<String, Value>) -> Option<ModerationKind> {
    match categoria {
        Category::Fundraiser => Some(ModerationKind::Vaquinha),
        Category::DonationPoint => payload
            .get("pix_chave")
            .and_then(Value::as_str)
            .filter(|s| !is_sentinel(s))
            .map(|_| ModerationKind::DoacaoPix),
        _ => None,
    }
}

/// Rename form fields to column names, drop empty/sentinel values and
/// coerce the array allow-list, even when a single value was supplied.
pub fn normalize_fields(campos: &Map<String, Value>) -> Map<String, Value> {
    let mut out = Map::new();

    for (field, value) in campos {
        let column = rename_field(field);

        if ARRAY_FIELDS.contains(&column) {
            let items: Vec<Value> = match value {
                Value::String(s) if !is_sentinel(s) => vec![Value::String(s.clone())],
                Value::Array(values) => values
                    .iter()
                    .filter_map(Value::as_str)
                    .filter(|s| !is_sentinel(s))
                    .map(|s| Value::String(s.to_string()))
                    .collect(),
                _ => Vec::new(),
            };
            if !items.is_empty() {
                out.insert(column.to_string(), Value::Array(items));
            }
            continue;
        }

        match value {
            Value::String(s) if !is_sentinel(s) => {
                out.insert(column.to_string(), Value::String(s.clone()));
            }
            // Repeated values on a scalar field collapse to one cell.
            Value::Array(values) => {
                let parts: Vec<&str> = values
                    .iter()
                    .filter_map(Value::as_str)
                    .filter(|s| !is_sentinel(s))
                    .collect();
                if !parts.is_empty() {
                    out.insert(column.to_string(), Value::String(parts.join(", ")));
                }
            }
            Value::Number(n) => {
                out.insert(column.to_string(), Value::String(n.to_string()));
            }
            Value::Bool(b) => {
                out.insert(column.to_string(), Value::String(b.to_string()));
            }
            _ => {}
        }
    }

    out
}

/// Human-readable submission summary, shown on the confirmation step and
/// shared as plain text.
pub fn build_summary(
    cidade: &str,
    categoria: Category,
    campos: &Map<String, Value>,
    datahora: String,
    app_url: &str,
) -> String {
    let mut lines = Vec::new();
    lines.push(format!(
        "=== MUTIRÃO — {} ===",
        categoria.label().to_uppercase()
    ));
    lines.push(format!("📍 Cidade: {}", cidade));
    lines.push(format!("📅 Data/hora: {}", datahora));
    lines.push(String::new());

    for (column, value) in campos {
        let rendered = match value {
            Value::String(s) if !is_sentinel(s) => s.clone(),
            Value::Array(items) => {
                let parts: Vec<&str> = items
                    .iter()
                    .filter_map(Value::as_str)
                    .filter(|s| !is_sentinel(s))
                    .collect();
                if parts.is_empty() {
                    continue;
                }
                parts.join(", ")
            }
            _ => continue,
        };
        lines.push(format!("• {}: {}", field_label(column), rendered));
    }

    lines.push(String::new());
    lines.push(format!("Registrado em {}", app_url));
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn campos(value: Value) -> Map<String, Value> {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn sentinels_dropped() {
        let normalized = normalize_fields(&campos(json!({
            "pix_chave": "— Não recebe PIX —",
            "pix_tipo": "— Não informar PIX —",
            "obs": "",
            "telefone": "32 99999-0000"
        })));
        assert_eq!(normalized.len(), 1);
        assert_eq!(normalized["telefone"], json!("32 99999-0000"));
    }

    #[test]
    fn fields_renamed() {
        let normalized = normalize_fields(&campos(json!({
            "whatsapp": "32 98888-0000",
            "local": "Escola Municipal"
        })));
        assert_eq!(normalized["telefone"], json!("32 98888-0000"));
        assert_eq!(normalized["nome_local"], json!("Escola Municipal"));
    }

    #[test]
    fn single_value_coerced_to_array() {
        let normalized = normalize_fields(&campos(json!({
            "recursos": "colchões",
            "necessidades": ["água", "roupas"]
        })));
        assert_eq!(normalized["recursos"], json!(["colchões"]));
        assert_eq!(normalized["necessidades"], json!(["água", "roupas"]));
    }

    #[test]
    fn sentinel_elements_dropped_inside_arrays() {
        let normalized = normalize_fields(&campos(json!({
            "aceita": ["alimentos", "", "— Não recebe PIX —"]
        })));
        assert_eq!(normalized["aceita"], json!(["alimentos"]));

        let empty = normalize_fields(&campos(json!({"aceita": ["", ""]})));
        assert!(empty.is_empty());
    }

    #[test]
    fn repeated_scalar_field_collapsed() {
        let normalized = normalize_fields(&campos(json!({
            "horario": ["8h-12h", "14h-18h"]
        })));
        assert_eq!(normalized["horario"], json!("8h-12h, 14h-18h"));
    }

    #[test]
    fn nulls_dropped() {
        let normalized = normalize_fields(&campos(json!({"obs": null, "vagas": "3"})));
        assert_eq!(normalized.len(), 1);
        assert_eq!(normalized["vagas"], json!("3"));
    }

    #[test]
    fn fundraiser_always_moderated() {
        let payload = campos(json!({"nome_campanha": "Ajuda Maria"}));
        assert_eq!(
            moderation_route(Category::Fundraiser, &payload),
            Some(ModerationKind::Vaquinha)
        );
    }

    #[test]
    fn donation_point_with_pix_moderated() {
        let with_pix = campos(json!({"nome_local": "Praça", "pix_chave": "chave@pix.com"}));
        assert_eq!(
            moderation_route(Category::DonationPoint, &with_pix),
            Some(ModerationKind::DoacaoPix)
        );

        let without_pix = campos(json!({"nome_local": "Praça"}));
        assert_eq!(moderation_route(Category::DonationPoint, &without_pix), None);
    }

    #[test]
    fn other_categories_never_moderated() {
        let payload = campos(json!({"pix_chave": "chave@pix.com"}));
        for cat in [
            Category::Shelter,
            Category::MissingPerson,
            Category::FeedingPoint,
            Category::Community,
            Category::Volunteer,
            Category::Donor,
        ] {
            assert_eq!(moderation_route(cat, &payload), None);
        }
    }

    #[test]
    fn summary_labels_and_footer() {
        let normalized = normalize_fields(&campos(json!({
            "vagas": "3",
            "recursos": ["colchões", "cobertores"],
            "pix_chave": "— Não recebe PIX —"
        })));
        let resumo = build_summary(
            "Juiz de Fora",
            Category::Shelter,
            &normalized,
            "29/08/2026 10:00".to_string(),
            "https://mutirao.example",
        );
        assert!(resumo.contains("📍 Cidade: Juiz de Fora"));
        assert!(resumo.contains("• Vagas disponíveis: 3"));
        assert!(resumo.contains("• Recursos disponíveis: colchões, cobertores"));
        assert!(!resumo.contains("PIX"));
        assert!(resumo.ends_with("Registrado em https://mutirao.example"));
    }

    #[test]
    fn summary_keeps_form_field_order() {
        // "vagas" sorts after "bairro"; the summary must still list it first
        let normalized = normalize_fields(&campos(json!({
            "vagas": "3",
            "bairro": "Centro",
            "telefone": "32 99999-0000"
        })));
        let resumo = build_summary(
            "Juiz de Fora",
            Category::Shelter,
            &normalized,
            "29/08/2026 10:00".to_string(),
            "https://mutirao.example",
        );
        let vagas = resumo.find("• Vagas disponíveis").unwrap();
        let bairro = resumo.find("• Bairro").unwrap();
        let telefone = resumo.find("• Telefone").unwrap();
        assert!(vagas < bairro);
        assert!(bairro < telefone);
    }
}
