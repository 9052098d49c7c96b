use thiserror::Error;

/// Why an AR session request was turned down.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DenialCause {
    Permission,
    NotSupported,
    Other(String),
}

impl DenialCause {
    /// Classify a `DOMException` name reported by the XR runtime.
    pub fn from_exception_name(name: &str) -> Self {
        match name {
            "NotAllowedError" | "SecurityError" => DenialCause::Permission,
            "NotSupportedError" => DenialCause::NotSupported,
            other => DenialCause::Other(other.to_string()),
        }
    }
}

#[derive(Debug, Error)]
pub enum MenuError {
    #[error("augmented reality is not available in this environment")]
    UnsupportedEnvironment,
    #[error("AR session request denied: {cause:?}")]
    SessionRequestDenied { cause: DenialCause },
    #[error("failed to load model: {0}")]
    ModelLoadFailure(String),
    #[error("missing required input: {0}")]
    MissingRequiredInput(&'static str),
    #[error("invalid value for {field}: {reason}")]
    InvalidInput { field: &'static str, reason: String },
    #[error("storage error: {0}")]
    Storage(String),
    #[error("failed to (de)serialize dish records: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl MenuError {
    /// Text for the blocking notification shown to the user.
    pub fn user_message(&self) -> String {
        match self {
            MenuError::UnsupportedEnvironment => "AR não é suportado neste dispositivo/navegador.\n\n\
                 Requisitos:\n\
                 - Chrome/Edge no Android\n\
                 - Safari no iOS 15+\n\
                 - Site em HTTPS\n\
                 - Permissão da câmera"
                .to_string(),
            MenuError::SessionRequestDenied { cause } => {
                let mut msg = String::from("Não foi possível iniciar a sessão AR.");
                match cause {
                    DenialCause::Permission => msg.push_str(
                        "\n\nPor favor, permita o acesso à câmera nas configurações do navegador.",
                    ),
                    DenialCause::NotSupported => {
                        msg.push_str("\n\nSeu dispositivo/navegador não suporta AR.")
                    }
                    DenialCause::Other(_) => {}
                }
                msg
            }
            MenuError::ModelLoadFailure(_) => {
                "Erro ao carregar o modelo 3D. Verifique se o arquivo existe.".to_string()
            }
            MenuError::MissingRequiredInput("model") => {
                "Por favor, selecione um arquivo .glb".to_string()
            }
            MenuError::MissingRequiredInput(field) => {
                format!("Por favor, preencha o campo obrigatório: {field}")
            }
            MenuError::InvalidInput { field, reason } => {
                format!("Valor inválido para {field}: {reason}")
            }
            MenuError::Storage(_) | MenuError::Serialization(_) => {
                "Não foi possível salvar os pratos neste navegador.".to_string()
            }
        }
    }
}
