//! Markup for the appointment form, rendered from `FormState`.
//!
//! Controls are bound to the current draft values. Time and specialty are
//! closed-choice selects; the date input's `min` is today.

use crate::models::{AppointmentDraft, DayPeriod, DraftField, Specialty};

// ═══════════════════════════════════════════════════════════
// Form markup
// ═══════════════════════════════════════════════════════════

/// Render the booking form for `draft`, with `error_message` shown in the
/// banner when non-empty and `min_date` (`YYYY-MM-DD`) on the date input.
pub fn render_form(draft: &AppointmentDraft, error_message: &str, min_date: &str) -> String {
    let error_banner = if error_message.is_empty() {
        String::new()
    } else {
        format!(
            r#"<div class="alert alert-danger" role="alert">{}</div>"#,
            escape_html(error_message)
        )
    };

    format!(
        r##"<div class="contenedorCita">
  <h1 class="citaTitle">Agenda tu cita:</h1>
  <form novalidate onsubmit="event.preventDefault()">
    <div class="mb-3">
      <label for="formName">{name_label}</label>
      <input type="text" id="formName" name="name" value="{name}" placeholder="Ingresa tu nombre" autofocus>
    </div>
    <div class="mb-3">
      <label for="formDate">{date_label}</label>
      <input type="date" id="formDate" name="date" value="{date}" min="{min_date}">
    </div>
    <div class="mb-3">
      <label for="formTime">{time_label}</label>
      <select id="formTime" name="time">
        <option value=""{time_unset}>Selecciona un turno</option>
{time_groups}      </select>
    </div>
    <div class="mb-3">
      <label for="formRut">{rut_label}</label>
      <input type="text" id="formRut" name="rut" value="{rut}" placeholder="Ingresa tu RUT (11 dígitos)">
    </div>
    <div class="mb-3">
      <label for="formSpecialty">{specialty_label}</label>
      <select id="formSpecialty" name="specialty">
        <option value=""{specialty_unset}>Selecciona una especialidad</option>
{specialty_options}      </select>
    </div>
    {error_banner}
    <button type="submit" class="btn btn-primary">Agendar</button>
  </form>
</div>"##,
        name_label = DraftField::Name.label(),
        date_label = DraftField::Date.label(),
        time_label = DraftField::Time.label(),
        rut_label = DraftField::Rut.label(),
        specialty_label = DraftField::Specialty.label(),
        name = escape_html(&draft.name),
        date = escape_html(&draft.date),
        min_date = escape_html(min_date),
        rut = escape_html(&draft.rut),
        time_unset = selected(draft.time.is_empty()),
        specialty_unset = selected(draft.specialty.is_empty()),
        time_groups = render_time_groups(&draft.time),
        specialty_options = render_specialty_options(&draft.specialty),
        error_banner = error_banner,
    )
}

fn render_time_groups(current: &str) -> String {
    let mut out = String::new();
    for period in DayPeriod::ALL {
        out.push_str(&format!("        <optgroup label=\"{}\">\n", period.label()));
        for slot in period.slots() {
            out.push_str(&format!(
                "          <option value=\"{}\"{}>{}</option>\n",
                slot.as_str(),
                selected(slot.as_str() == current),
                slot.caption()
            ));
        }
        out.push_str("        </optgroup>\n");
    }
    out
}

fn render_specialty_options(current: &str) -> String {
    let mut out = String::new();
    for specialty in Specialty::ALL {
        out.push_str(&format!(
            "        <option value=\"{0}\"{1}>{0}</option>\n",
            specialty.as_str(),
            selected(specialty.as_str() == current)
        ));
    }
    out
}

fn selected(on: bool) -> &'static str {
    if on {
        " selected"
    } else {
        ""
    }
}

/// Escape text for use in element content and quoted attributes.
pub fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

// ═══════════════════════════════════════════════════════════
// Tests
// ═══════════════════════════════════════════════════════════

#[cfg(test)]
mod tests {
    use super::*;

    fn empty() -> String {
        render_form(&AppointmentDraft::default(), "", "2026-10-19")
    }

    #[test]
    fn empty_form_has_all_controls() {
        let html = empty();
        assert!(html.contains("Agenda tu cita:"));
        assert!(html.contains(r#"placeholder="Ingresa tu nombre""#));
        assert!(html.contains(r#"placeholder="Ingresa tu RUT (11 dígitos)""#));
        assert!(html.contains(r#"<option value="" selected>Selecciona un turno</option>"#));
        assert!(html.contains(r#"<option value="" selected>Selecciona una especialidad</option>"#));
        assert!(html.contains(">Agendar</button>"));
    }

    #[test]
    fn date_input_min_is_today() {
        assert!(empty().contains(r#"type="date" id="formDate" name="date" value="" min="2026-10-19""#));
    }

    #[test]
    fn time_slots_grouped_by_period() {
        let html = empty();
        let morning = html.find(r#"<optgroup label="Mañana">"#).unwrap();
        let afternoon = html.find(r#"<optgroup label="Tarde">"#).unwrap();
        let nine = html.find(r#"<option value="09:00">09:00 AM</option>"#).unwrap();
        let three = html.find(r#"<option value="03:00">03:00 PM</option>"#).unwrap();
        assert!(morning < nine && nine < afternoon && afternoon < three);
    }

    #[test]
    fn specialties_listed() {
        let html = empty();
        for s in ["Cardiología", "Dermatología", "Pediatría", "Odontología"] {
            assert!(html.contains(&format!(r#"<option value="{s}">{s}</option>"#)), "{s}");
        }
    }

    #[test]
    fn current_values_are_bound() {
        let draft = AppointmentDraft {
            name: "Ana".into(),
            date: "2999-01-01".into(),
            time: "04:00".into(),
            rut: "12345678901".into(),
            specialty: "Odontología".into(),
        };
        let html = render_form(&draft, "", "2026-10-19");
        assert!(html.contains(r#"name="name" value="Ana""#));
        assert!(html.contains(r#"value="2999-01-01""#));
        assert!(html.contains(r#"<option value="04:00" selected>04:00 PM</option>"#));
        assert!(html.contains(r#"<option value="Odontología" selected>Odontología</option>"#));
        assert!(html.contains(r#"<option value="">Selecciona un turno</option>"#));
    }

    #[test]
    fn banner_only_when_error() {
        assert!(!empty().contains("alert-danger"));
        let html = render_form(
            &AppointmentDraft::default(),
            "Todos los campos son obligatorios.",
            "2026-10-19",
        );
        assert!(html.contains(
            r#"<div class="alert alert-danger" role="alert">Todos los campos son obligatorios.</div>"#
        ));
    }

    #[test]
    fn values_are_escaped() {
        let draft = AppointmentDraft {
            name: r#""><script>alert(1)</script>"#.into(),
            ..Default::default()
        };
        let html = render_form(&draft, "", "2026-10-19");
        assert!(!html.contains("<script>"));
        assert!(html.contains("&quot;&gt;&lt;script&gt;"));
    }

    #[test]
    fn escape_html_handles_ampersand_first() {
        assert_eq!(escape_html("a&<b>'"), "a&amp;&lt;b&gt;&#39;");
    }
}
