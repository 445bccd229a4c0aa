use std::io::{self, Write};

use crate::models::{LimitProfile, Outcome};
use crate::report::{ClientSummary, Report, TransactionRow};

const STYLE: &str = "body{font-family:sans-serif;margin:2em}\
table{border-collapse:collapse;margin-bottom:2em}\
th,td{border:1px solid #999;padding:4px 8px;text-align:left}\
th{background:#eee}\
td.amount{text-align:right}\
tr.rejected td{background:#fbeaea}";

/// Write the report as a standalone HTML document
pub fn render_html<W: Write>(report: &Report, mut writer: W) -> io::Result<()> {
    let title = format!("Reporte de transacciones - {}", report.header.full_name);

    writeln!(writer, "<!DOCTYPE html>")?;
    writeln!(writer, "<html lang=\"es\">")?;
    writeln!(writer, "<head>")?;
    writeln!(writer, "<meta charset=\"utf-8\">")?;
    writeln!(writer, "<title>{}</title>", escape(&title))?;
    writeln!(writer, "<style>{}</style>", STYLE)?;
    writeln!(writer, "</head>")?;
    writeln!(writer, "<body>")?;
    writeln!(writer, "<h1>{}</h1>", escape(&title))?;

    write_client(&mut writer, &report.header)?;
    write_limits(&mut writer, &report.header.profile)?;
    write_transactions(&mut writer, &report.rows)?;

    writeln!(writer, "</body>")?;
    writeln!(writer, "</html>")?;
    writer.flush()
}

fn write_client<W: Write>(writer: &mut W, header: &ClientSummary) -> io::Result<()> {
    writeln!(writer, "<section id=\"cliente\">")?;
    writeln!(writer, "<h2>Cliente</h2>")?;
    writeln!(writer, "<dl>")?;
    write_entry(writer, "Nombre", &header.full_name)?;
    write_entry(writer, "Numero", &header.number.to_string())?;
    write_entry(writer, "DNI", &header.dni)?;
    write_entry(writer, "Direccion", &header.address)?;
    write_entry(writer, "Tipo", header.tier.as_str())?;
    writeln!(writer, "</dl>")?;
    writeln!(writer, "</section>")
}

fn write_entry<W: Write>(writer: &mut W, label: &str, value: &str) -> io::Result<()> {
    writeln!(writer, "<dt>{}</dt><dd>{}</dd>", label, escape(value))
}

fn write_limits<W: Write>(writer: &mut W, profile: &LimitProfile) -> io::Result<()> {
    let yes_no = |allowed: bool| if allowed { "Si" } else { "No" };

    writeln!(writer, "<section id=\"limites\">")?;
    writeln!(writer, "<h2>Limites de la cuenta</h2>")?;
    writeln!(writer, "<table>")?;
    let limits = [
        ("Limite de extraccion diario", profile.daily_withdrawal_cap.to_string()),
        ("Limite de transferencia recibida", profile.incoming_transfer_cap.to_string()),
        ("Costo de transferencias", profile.transfer_fee_rate.to_string()),
        ("Saldo descubierto disponible", profile.overdraft_allowance.to_string()),
        ("Compra de dolares", yes_no(profile.dollar_purchases_allowed).to_string()),
        ("Chequeras", profile.checkbook_cap.to_string()),
        ("Tarjetas de credito", profile.credit_card_cap.to_string()),
    ];
    for (label, value) in &limits {
        writeln!(writer, "<tr><th>{}</th><td>{}</td></tr>", label, escape(value))?;
    }
    writeln!(writer, "</table>")?;
    writeln!(writer, "</section>")
}

fn write_transactions<W: Write>(writer: &mut W, rows: &[TransactionRow]) -> io::Result<()> {
    writeln!(writer, "<section id=\"transacciones\">")?;
    writeln!(writer, "<h2>Transacciones</h2>")?;

    if rows.is_empty() {
        writeln!(writer, "<p>El cliente no registra transacciones.</p>")?;
        return writeln!(writer, "</section>");
    }

    writeln!(writer, "<table>")?;
    writeln!(
        writer,
        "<tr><th>Fecha</th><th>Tipo</th><th>Estado</th><th>Monto</th><th>Razon</th></tr>"
    )?;
    for row in rows {
        let class = match row.outcome {
            Outcome::Accepted => "accepted",
            Outcome::Rejected => "rejected",
        };
        writeln!(
            writer,
            concat!(
                "<tr class=\"{}\"><td>{}</td><td>{}</td><td>{}</td>",
                "<td class=\"amount\">{}</td><td>{}</td></tr>"
            ),
            class,
            escape(&row.date),
            escape(&row.type_name),
            row.outcome,
            row.amount,
            escape(&row.reason)
        )?;
    }
    writeln!(writer, "</table>")?;
    writeln!(writer, "</section>")
}

/// Escape text for use in element content and quoted attributes
fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
