use crate::domain::Category;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use utoipa::ToSchema;

/// The four wizard steps, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum Step {
    #[default]
    City,
    Category,
    Form,
    Confirmation,
}

/// Explicit wizard state, held by the client and threaded through
/// `apply`. No ambient globals.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct WizardState {
    #[serde(default)]
    pub step: Step,
    pub cidade: Option<String>,
    pub categoria: Option<Category>,
    #[serde(default)]
    #[schema(value_type = Object)]
    pub campos: Map<String, Value>,
    /// Set on completion when the record awaits moderation.
    #[serde(default)]
    pub pendente: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum WizardEvent {
    SelectCity { cidade: String },
    SelectCategory { categoria: Category },
    FieldsEntered {
        #[schema(value_type = Object)]
        campos: Map<String, Value>,
    },
    Completed { pendente: bool },
    Back,
    Restart,
}

/// What the client should render after a transition; no markup here.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct StepView {
    pub step: Step,
    pub cidade: Option<String>,
    pub categoria: Option<Category>,
    pub categoria_label: Option<&'static str>,
    pub pendente: bool,
    /// True whenever the visible step changed; the view scrolls to top.
    pub scroll_to_top: bool,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct Transition {
    pub state: WizardState,
    pub view: StepView,
}

/// Pure step-transition function. Events that make no sense for the
/// current state leave it unchanged.
pub fn apply(mut state: WizardState, event: WizardEvent) -> Transition {
    let previous_step = state.step;

    match event {
        WizardEvent::SelectCity { cidade } => {
            state.cidade = Some(cidade);
            state.step = Step::Category;
        }
        WizardEvent::SelectCategory { categoria } => {
            if state.cidade.is_some() {
                state.categoria = Some(categoria);
                state.step = Step::Form;
            }
        }
        WizardEvent::FieldsEntered { campos } => {
            if state.step == Step::Form {
                state.campos = campos;
            }
        }
        WizardEvent::Completed { pendente } => {
            if state.step == Step::Form {
                state.pendente = pendente;
                state.step = Step::Confirmation;
            }
        }
        WizardEvent::Back => {
            state.step = match state.step {
                Step::City | Step::Category => Step::City,
                Step::Form => Step::Category,
                Step::Confirmation => Step::Form,
            };
        }
        WizardEvent::Restart => {
            state = WizardState::default();
        }
    }

    let view = StepView {
        step: state.step,
        cidade: state.cidade.clone(),
        categoria: state.categoria,
        categoria_label: state.categoria.map(Category::label),
        pendente: state.pendente,
        scroll_to_top: state.step != previous_step,
    };

    Transition { state, view }
}
