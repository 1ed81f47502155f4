use std::fmt;
use std::str::FromStr;
use serde::{Deserialize, Serialize};

/// Tipo de documento IMSS que se solicita
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QueryType {
    /// Asignación / localización de NSS
    #[default]
    Asignacion,
    /// Semanas cotizadas
    Semanas,
    /// Vigencia de derechos
    Vigencia,
    /// Constancia de no derechohabiencia
    Noderecho,
}

impl QueryType {
    pub const ALL: [QueryType; 4] = [
        QueryType::Asignacion,
        QueryType::Semanas,
        QueryType::Vigencia,
        QueryType::Noderecho,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            QueryType::Asignacion => "asignacion",
            QueryType::Semanas => "semanas",
            QueryType::Vigencia => "vigencia",
            QueryType::Noderecho => "noderecho",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            QueryType::Asignacion => "Asignación de NSS",
            QueryType::Semanas => "Semanas cotizadas",
            QueryType::Vigencia => "Vigencia de derechos",
            QueryType::Noderecho => "No derechohabiencia",
        }
    }

    /// Solo semanas y vigencia necesitan el NSS además de la CURP
    pub fn requires_nss(&self) -> bool {
        matches!(self, QueryType::Semanas | QueryType::Vigencia)
    }
}

impl fmt::Display for QueryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for QueryType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        QueryType::ALL
            .iter()
            .copied()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| format!("Tipo de consulta desconocido: {}", s))
    }
}

/// Body de POST /imss
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImssQueryRequest {
    #[serde(rename = "type")]
    pub query_type: QueryType,
    pub curp: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nss: Option<String>,
}

/// Respuesta de POST /imss
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ImssQueryResponse {
    #[serde(rename = "pdfUrl", default)]
    pub pdf_url: Option<String>,
}
