use crate::domain::{display_value, field_label, Category};
use crate::error::{AppError, AppResult};
use crate::models::{
    community, donation_point, donor, feeding_point, fundraiser, missing_person, shelter,
    volunteer, Community, DonationPoint, Donor, FeedingPoint, Fundraiser, MissingPerson, Shelter,
    Volunteer,
};
use crate::services::city::CityDirectory;
use crate::services::moderation::STATUS_APPROVED;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, QuerySelect};
use serde::Serialize;
use serde_json::{Map, Value};
use utoipa::ToSchema;

/// Most-recent rows fetched per category table.
const CARDS_PER_CATEGORY: u64 = 100;

#[derive(Debug, Serialize, ToSchema)]
pub struct CardLine {
    pub label: String,
    pub value: String,
}

/// View model for one rendered record; no markup, the client templates it.
#[derive(Debug, Serialize, ToSchema)]
pub struct Card {
    pub id: i32,
    pub categoria: &'static str,
    pub categoria_label: &'static str,
    pub cidade: String,
    pub titulo: String,
    pub linhas: Vec<CardLine>,
    /// External campaign link (fundraisers only).
    pub link: Option<String>,
    /// Uploaded QR-code image, when one was approved along with the record.
    pub imagem: Option<String>,
    pub registrado_em: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CatalogPage {
    pub cards: Vec<Card>,
    pub total: usize,
}

/// Which subset of columns each category's card shows, in display order.
struct CardTemplate {
    titulo: &'static str,
    linhas: &'static [&'static str],
    link: Option<&'static str>,
    imagem: Option<&'static str>,
}

fn template(categoria: Category) -> CardTemplate {
    match categoria {
        Category::Shelter => CardTemplate {
            titulo: "nome_local",
            linhas: &[
                "endereco",
                "bairro",
                "vagas",
                "recursos",
                "animais",
                "telefone",
                "responsavel",
                "obs",
            ],
            link: None,
            imagem: None,
        },
        Category::DonationPoint => CardTemplate {
            titulo: "nome_local",
            linhas: &[
                "endereco",
                "horario",
                "aceita",
                "pix_tipo",
                "pix_chave",
                "pix_titular",
                "telefone",
                "obs",
            ],
            link: None,
            imagem: Some("pix_qrcode_url"),
        },
        Category::MissingPerson => CardTemplate {
            titulo: "nome_pessoa",
            linhas: &[
                "idade",
                "descricao",
                "ultima_vez",
                "local_visto",
                "saude",
                "informante_nome",
                "informante_tel",
                "relacao",
                "obs",
            ],
            link: None,
            imagem: None,
        },
        Category::FeedingPoint => CardTemplate {
            titulo: "nome_local",
            linhas: &[
                "endereco",
                "horario",
                "refeicao",
                "capacidade",
                "voluntarios",
                "telefone",
                "obs",
            ],
            link: None,
            imagem: None,
        },
        Category::Community => CardTemplate {
            titulo: "nome_local",
            linhas: &[
                "bairro",
                "familias",
                "necessidades",
                "nao_precisa",
                "prioridade",
                "responsavel",
                "telefone",
                "obs",
            ],
            link: None,
            imagem: None,
        },
        Category::Volunteer => CardTemplate {
            titulo: "nome",
            linhas: &[
                "bairro",
                "habilidade",
                "disponibilidade",
                "veiculo",
                "telefone",
                "obs",
            ],
            link: None,
            imagem: None,
        },
        Category::Fundraiser => CardTemplate {
            titulo: "nome_campanha",
            linhas: &[
                "descricao",
                "responsavel",
                "telefone",
                "pix_tipo",
                "pix_chave",
                "pix_titular",
                "obs",
            ],
            link: Some("link"),
            imagem: Some("pix_qrcode_url"),
        },
        Category::Donor => CardTemplate {
            titulo: "nome",
            linhas: &["bairro", "itens", "telefone", "obs"],
            link: None,
            imagem: None,
        },
    }
}

/// Read-only view over the category tables.
pub struct CatalogService {
    db: DatabaseConnection,
    cities: CityDirectory,
}

impl CatalogService {
    pub fn new(db: DatabaseConnection, cities: CityDirectory) -> Self {
        Self { db, cities }
    }

    /// Fetch the most recent rows of the selected categories (all of them
    /// when no filter is given) and render them as cards.
    pub async fn list(
        &self,
        cidade: Option<&str>,
        categoria: Option<Category>,
    ) -> AppResult<CatalogPage> {
        let city_id = match cidade {
            Some(name) => Some(self.cities.resolve(name).await?),
            None => None,
        };

        let selected: Vec<Category> = match categoria {
            Some(cat) => vec![cat],
            None => Category::ALL.to_vec(),
        };

        let mut rows_by_category = Vec::new();
        for cat in selected {
            let rows = self.fetch_category(cat, city_id).await?;
            rows_by_category.push((cat, rows));
        }

        let mut city_ids: Vec<i32> = rows_by_category
            .iter()
            .flat_map(|(_, rows)| rows.iter())
            .filter_map(|row| row.get("city_id").and_then(Value::as_i64))
            .map(|id| id as i32)
            .collect();
        city_ids.sort_unstable();
        city_ids.dedup();
        let city_names = self.cities.names_for(&city_ids).await?;

        let mut cards = Vec::new();
        for (cat, rows) in rows_by_category {
            for row in rows {
                let Value::Object(obj) = row else { continue };
                let cidade_nome = obj
                    .get("city_id")
                    .and_then(Value::as_i64)
                    .and_then(|id| city_names.get(&(id as i32)))
                    .cloned()
                    .unwrap_or_default();
                cards.push(render_card(cat, &obj, cidade_nome));
            }
        }

        let total = cards.len();
        Ok(CatalogPage { cards, total })
    }

    async fn fetch_category(&self, cat: Category, city_id: Option<i32>) -> AppResult<Vec<Value>> {
        let rows = match cat {
            Category::Shelter => {
                let mut q = Shelter::find()
                    .order_by_desc(shelter::Column::CreatedAt)
                    .limit(CARDS_PER_CATEGORY);
                if let Some(id) = city_id {
                    q = q.filter(shelter::Column::CityId.eq(id));
                }
                to_values(q.all(&self.db).await?)?
            }
            Category::DonationPoint => {
                let mut q = DonationPoint::find()
                    .filter(donation_point::Column::ModerationStatus.eq(STATUS_APPROVED))
                    .order_by_desc(donation_point::Column::CreatedAt)
                    .limit(CARDS_PER_CATEGORY);
                if let Some(id) = city_id {
                    q = q.filter(donation_point::Column::CityId.eq(id));
                }
                to_values(q.all(&self.db).await?)?
            }
            Category::MissingPerson => {
                let mut q = MissingPerson::find()
                    .order_by_desc(missing_person::Column::CreatedAt)
                    .limit(CARDS_PER_CATEGORY);
                if let Some(id) = city_id {
                    q = q.filter(missing_person::Column::CityId.eq(id));
                }
                to_values(q.all(&self.db).await?)?
            }
            Category::FeedingPoint => {
                let mut q = FeedingPoint::find()
                    .order_by_desc(feeding_point::Column::CreatedAt)
                    .limit(CARDS_PER_CATEGORY);
                if let Some(id) = city_id {
                    q = q.filter(feeding_point::Column::CityId.eq(id));
                }
                to_values(q.all(&self.db).await?)?
            }
            Category::Community => {
                let mut q = Community::find()
                    .order_by_desc(community::Column::CreatedAt)
                    .limit(CARDS_PER_CATEGORY);
                if let Some(id) = city_id {
                    q = q.filter(community::Column::CityId.eq(id));
                }
                to_values(q.all(&self.db).await?)?
            }
            Category::Volunteer => {
                let mut q = Volunteer::find()
                    .order_by_desc(volunteer::Column::CreatedAt)
                    .limit(CARDS_PER_CATEGORY);
                if let Some(id) = city_id {
                    q = q.filter(volunteer::Column::CityId.eq(id));
                }
                to_values(q.all(&self.db).await?)?
            }
            Category::Fundraiser => {
                let mut q = Fundraiser::find()
                    .filter(fundraiser::Column::ModerationStatus.eq(STATUS_APPROVED))
                    .order_by_desc(fundraiser::Column::CreatedAt)
                    .limit(CARDS_PER_CATEGORY);
                if let Some(id) = city_id {
                    q = q.filter(fundraiser::Column::CityId.eq(id));
                }
                to_values(q.all(&self.db).await?)?
            }
            Category::Donor => {
                let mut q = Donor::find()
                    .order_by_desc(donor::Column::CreatedAt)
                    .limit(CARDS_PER_CATEGORY);
                if let Some(id) = city_id {
                    q = q.filter(donor::Column::CityId.eq(id));
                }
                to_values(q.all(&self.db).await?)?
            }
        };
        Ok(rows)
    }
}

fn to_values<T: Serialize>(rows: Vec<T>) -> AppResult<Vec<Value>> {
    rows.into_iter()
        .map(|r| serde_json::to_value(r).map_err(|e| AppError::Internal(e.into())))
        .collect()
}

fn render_card(categoria: Category, row: &Map<String, Value>, cidade: String) -> Card {
    let tpl = template(categoria);

    let titulo = row
        .get(tpl.titulo)
        .and_then(display_value)
        .unwrap_or_else(|| "Sem nome".to_string());

    let linhas = tpl
        .linhas
        .iter()
        .filter_map(|column| {
            row.get(*column).and_then(display_value).map(|value| CardLine {
                label: field_label(column).to_string(),
                value,
            })
        })
        .collect();

    let link = tpl
        .link
        .and_then(|column| row.get(column))
        .and_then(display_value);
    let imagem = tpl
        .imagem
        .and_then(|column| row.get(column))
        .and_then(display_value);

    let registrado_em = row
        .get("created_at")
        .and_then(Value::as_str)
        .map(|s| s.to_string());

    Card {
        id: row.get("id").and_then(Value::as_i64).unwrap_or_default() as i32,
        categoria: categoria.slug(),
        categoria_label: categoria.label(),
        cidade,
        titulo,
        linhas,
        link,
        imagem,
        registrado_em,
    }
}
