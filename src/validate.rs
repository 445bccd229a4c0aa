use std::fmt;

use serde_json::{Map, Value};

pub(crate) const TIER_NAMES: &[&str] = &["CLASSIC", "GOLD", "BLACK"];
pub(crate) const OUTCOME_NAMES: &[&str] = &["ACEPTADA", "RECHAZADA"];
pub(crate) const TRANSACTION_TYPE_NAMES: &[&str] = &[
    "RETIRO_EFECTIVO_CAJERO_AUTOMATICO",
    "ALTA_TARJETA_CREDITO",
    "ALTA_CHEQUERA",
    "COMPRA_DOLAR",
    "COMPRAR_DOLAR",
    "TRANSFERENCIA_ENVIADA",
    "TRANSFERENCIA_RECIBIDA",
];

const ADDRESS_FIELDS: &[&str] = &["calle", "numero", "ciudad", "provincia", "pais"];

/// Open checkbook and credit card counts are held as `u32`
const COUNTER_MAX: u64 = u32::MAX as u64;

/// A place where the input document does not match the expected shape
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaIssue {
    /// Location in the document, e.g. `transacciones[2].monto`
    pub path: String,
    pub message: String,
}

impl SchemaIssue {
    fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for SchemaIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.path, self.message)
    }
}

/// Check a parsed client document, returning every issue found.
/// Fields not listed in the schema are ignored.
pub(crate) fn validate_document(document: &Value) -> Vec<SchemaIssue> {
    let mut issues = Vec::new();

    let Some(root) = document.as_object() else {
        issues.push(SchemaIssue::new("$", "must be an object"));
        return issues;
    };

    validate_integer(root, "numero", "numero", u64::MAX, true, &mut issues);
    validate_string(root, "nombre", "nombre", &mut issues);
    validate_string(root, "apellido", "apellido", &mut issues);
    validate_dni(root, &mut issues);
    validate_enum(root, "tipo", "tipo", TIER_NAMES, &mut issues);

    match root.get("direccion") {
        Some(Value::Object(address)) => {
            for field in ADDRESS_FIELDS {
                let path = format!("direccion.{}", field);
                validate_string(address, field, &path, &mut issues);
            }
        }
        Some(_) => issues.push(SchemaIssue::new("direccion", "must be an object")),
        None => issues.push(SchemaIssue::new("direccion", "is required")),
    }

    match root.get("transacciones") {
        Some(Value::Array(transactions)) => {
            for (index, tx) in transactions.iter().enumerate() {
                validate_transaction(index, tx, &mut issues);
            }
        }
        Some(_) => issues.push(SchemaIssue::new("transacciones", "must be an array")),
        None => issues.push(SchemaIssue::new("transacciones", "is required")),
    }

    issues
}

fn validate_transaction(index: usize, tx: &Value, issues: &mut Vec<SchemaIssue>) {
    let prefix = format!("transacciones[{}]", index);
    let Some(record) = tx.as_object() else {
        issues.push(SchemaIssue::new(prefix, "must be an object"));
        return;
    };

    let path = |field: &str| format!("{}.{}", prefix, field);

    validate_enum(record, "estado", &path("estado"), OUTCOME_NAMES, issues);
    validate_enum(record, "tipo", &path("tipo"), TRANSACTION_TYPE_NAMES, issues);
    validate_string(record, "fecha", &path("fecha"), issues);
    validate_number(record, "monto", &path("monto"), issues);
    validate_number(record, "saldoEnCuenta", &path("saldoEnCuenta"), issues);
    validate_number(record, "cupoDiarioRestante", &path("cupoDiarioRestante"), issues);
    validate_integer(record, "numero", &path("numero"), u64::MAX, false, issues);
    validate_integer(record, "cuentaNumero", &path("cuentaNumero"), u64::MAX, false, issues);
    for counter in ["totalTarjetasDeCreditoActualmente", "totalChequerasActualmente"] {
        validate_integer(record, counter, &path(counter), COUNTER_MAX, false, issues);
    }
}

fn validate_string(
    object: &Map<String, Value>,
    field: &str,
    path: &str,
    issues: &mut Vec<SchemaIssue>,
) {
    match object.get(field) {
        Some(Value::String(_)) => {}
        Some(_) => issues.push(SchemaIssue::new(path, "must be a string")),
        None => issues.push(SchemaIssue::new(path, "is required")),
    }
}

fn validate_number(
    object: &Map<String, Value>,
    field: &str,
    path: &str,
    issues: &mut Vec<SchemaIssue>,
) {
    match object.get(field) {
        Some(Value::Number(_)) => {}
        Some(_) => issues.push(SchemaIssue::new(path, "must be a number")),
        None => issues.push(SchemaIssue::new(path, "is required")),
    }
}

/// Counters and identifiers must be unsigned integers no larger than `max`
fn validate_integer(
    object: &Map<String, Value>,
    field: &str,
    path: &str,
    max: u64,
    required: bool,
    issues: &mut Vec<SchemaIssue>,
) {
    match object.get(field) {
        Some(Value::Number(number)) if number.as_u64().is_some_and(|value| value <= max) => {}
        Some(Value::Number(number)) if !number.is_u64() && is_whole(number, max) => {}
        Some(_) => issues.push(SchemaIssue::new(
            path,
            format!("must be a non-negative integer up to {}", max),
        )),
        None if required => issues.push(SchemaIssue::new(path, "is required")),
        None => {}
    }
}

fn validate_enum(
    object: &Map<String, Value>,
    field: &str,
    path: &str,
    allowed: &[&str],
    issues: &mut Vec<SchemaIssue>,
) {
    match object.get(field) {
        Some(Value::String(value)) if allowed.contains(&value.as_str()) => {}
        Some(_) => issues.push(SchemaIssue::new(
            path,
            format!("must be one of {}", allowed.join(", ")),
        )),
        None => issues.push(SchemaIssue::new(path, "is required")),
    }
}

fn validate_dni(root: &Map<String, Value>, issues: &mut Vec<SchemaIssue>) {
    match (root.get("dni"), root.get("DNI")) {
        (Some(_), Some(_)) => issues.push(SchemaIssue::new("dni", "given twice, as dni and DNI")),
        (Some(_), None) => validate_string(root, "dni", "dni", issues),
        (None, Some(_)) => validate_string(root, "DNI", "DNI", issues),
        (None, None) => issues.push(SchemaIssue::new("dni", "is required")),
    }
}

/// Whole non-negative floats such as `2.0`, which JSON writers commonly emit.
/// `max as f64 + 1.0` is exact for `u32::MAX` and rounds to 2^64 for `u64::MAX`,
/// so the strict comparison keeps the value convertible.
fn is_whole(number: &serde_json::Number, max: u64) -> bool {
    number
        .as_f64()
        .map(|value| value >= 0.0 && value.fract() == 0.0 && value < max as f64 + 1.0)
        .unwrap_or(false)
}
