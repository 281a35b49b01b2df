//! Defect form: rendering, submission checks and the create round-trip.

use std::collections::BTreeMap;

use actix_web::http::{StatusCode, header};
use actix_web::{HttpResponse, get, post, web};
use chrono::{DateTime, Datelike, NaiveDate, NaiveTime, Utc};
use serde::Deserialize;
use tracing::error;

use super::html::{escape, html_response, page};
use crate::db::DbPool;
use crate::models::{Classification, DEFAULT_SEVERITY, KindOfTest, NewDefect, SEVERITY_RANGE};
use crate::services::create_defect;

/// Value stored as `realResults` for every form submission, whatever was entered.
pub const REAL_RESULTS_PLACEHOLDER: &str = "Test example";

/// Earliest selectable discovery year.
const MIN_YEAR: i32 = 1900;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Locks the controls while a submission is in flight. A fresh render from
/// the server always starts unlocked.
///
/// `readOnly` has no effect on selects or file inputs, so select values are
/// copied into hidden inputs and the selects themselves are disabled.
const SUBMIT_SCRIPT: &str = r#"<script>
document.getElementById('defect-form').addEventListener('submit', function (e) {
  var form = e.currentTarget;
  form.classList.add('submitting');
  form.querySelectorAll('input[type=text], input[type=date], textarea').forEach(function (el) { el.readOnly = true; });
  form.querySelectorAll('select').forEach(function (el) {
    var copy = document.createElement('input');
    copy.type = 'hidden';
    copy.name = el.name;
    copy.value = el.value;
    form.appendChild(copy);
    el.disabled = true;
  });
  form.querySelectorAll('input[type=file]').forEach(function (el) { el.disabled = true; });
  form.querySelector('button[type=submit]').disabled = true;
});
</script>"#;

/// Per-field validation messages keyed by form field name.
pub type FieldErrors = BTreeMap<&'static str, String>;

/// Raw form submission, every field as entered.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DefectForm {
    pub date: String,
    pub time: String,
    pub tester_name: String,
    pub test_case_number: String,
    pub kind_of_test: String,
    pub classification: String,
    pub severity: String,
    pub steps_to_reproduce: String,
    pub real_results: String,
    pub expected_results: String,
    pub version: String,
    pub additional_information: String,
}

impl DefectForm {
    /// Values shown on a fresh form.
    pub fn with_defaults(today: NaiveDate) -> Self {
        Self {
            date: today.format(DATE_FORMAT).to_string(),
            severity: DEFAULT_SEVERITY.to_string(),
            ..Self::default()
        }
    }

    /// Check the submission and build the payload to store.
    ///
    /// The date becomes UTC midnight, severity is parsed to an integer, blank
    /// optional fields are dropped and `realResults` is replaced with
    /// [`REAL_RESULTS_PLACEHOLDER`].
    pub fn to_new_defect(&self, today: NaiveDate) -> Result<NewDefect, FieldErrors> {
        let mut errors = FieldErrors::new();

        let date = match parse_date(&self.date, today) {
            Ok(d) => Some(d),
            Err(msg) => {
                errors.insert("date", msg);
                None
            }
        };

        for (name, value, label) in [
            ("time", &self.time, "Time"),
            ("testerName", &self.tester_name, "Tester name"),
            ("testCaseNumber", &self.test_case_number, "Test-case number"),
            ("version", &self.version, "Version"),
        ] {
            if value.trim().is_empty() {
                errors.insert(name, format!("{} is required", label));
            }
        }

        let kind_of_test = KindOfTest::parse(self.kind_of_test.trim());
        if kind_of_test.is_none() {
            errors.insert("kindOfTest", "Choose the kind of test".to_string());
        }

        let classification = Classification::parse(self.classification.trim());
        if classification.is_none() {
            errors.insert("classification", "Choose a classification".to_string());
        }

        let severity = self
            .severity
            .trim()
            .parse::<i32>()
            .ok()
            .filter(|s| SEVERITY_RANGE.contains(s));
        if severity.is_none() {
            errors.insert(
                "severity",
                format!(
                    "Severity must be a whole number from {} to {}",
                    SEVERITY_RANGE.start(),
                    SEVERITY_RANGE.end()
                ),
            );
        }

        match (date, kind_of_test, classification, severity) {
            (Some(date), Some(kind_of_test), Some(classification), Some(severity))
                if errors.is_empty() =>
            {
                Ok(NewDefect {
                    date,
                    time: self.time.trim().to_string(),
                    tester_name: self.tester_name.trim().to_string(),
                    test_case_number: self.test_case_number.trim().to_string(),
                    kind_of_test,
                    classification,
                    severity,
                    steps_to_reproduce: non_blank(&self.steps_to_reproduce),
                    real_results: REAL_RESULTS_PLACEHOLDER.to_string(),
                    expected_results: non_blank(&self.expected_results),
                    version: self.version.trim().to_string(),
                    additional_information: non_blank(&self.additional_information),
                })
            }
            _ => Err(errors),
        }
    }
}

/// Latest accepted discovery date. `today` is the server's UTC date; one extra
/// day keeps users east of UTC from being rejected around their midnight.
fn latest_date(today: NaiveDate) -> NaiveDate {
    today.succ_opt().unwrap_or(today)
}

fn parse_date(raw: &str, today: NaiveDate) -> Result<DateTime<Utc>, String> {
    let date = NaiveDate::parse_from_str(raw.trim(), DATE_FORMAT)
        .map_err(|_| "Pick a valid date".to_string())?;

    if date > latest_date(today) {
        return Err("Date cannot be in the future".to_string());
    }
    if date.year() < MIN_YEAR {
        return Err(format!("Date cannot be before {}", MIN_YEAR));
    }

    Ok(date.and_time(NaiveTime::MIN).and_utc())
}

fn non_blank(s: &str) -> Option<String> {
    let trimmed = s.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

/// Render the full form page.
pub fn render_form_page(form: &DefectForm, errors: &FieldErrors, today: NaiveDate) -> String {
    let mut body = String::new();

    body.push_str(
        "<main><div class=\"card\">\n<h1>Defect record</h1>\n\
         <p class=\"subtitle\">Efficiently Capture and Track Issues</p>\n\
         <form id=\"defect-form\" method=\"post\" action=\"/\" novalidate>\n",
    );

    body.push_str("<div class=\"row\">\n");
    body.push_str(&field(
        "date",
        "Date",
        &format!(
            "<input id=\"date\" type=\"date\" name=\"date\" value=\"{}\" min=\"{}-01-01\" max=\"{}\">",
            escape(&form.date),
            MIN_YEAR,
            latest_date(today).format(DATE_FORMAT)
        ),
        errors,
    ));
    body.push_str(&text_input(
        "time",
        "Time",
        &form.time,
        "e.g. 04:18 AM or PM",
        errors,
    ));
    body.push_str("</div>\n");

    body.push_str(&text_input(
        "testerName",
        "Tester Name",
        &form.tester_name,
        "Identify the tester",
        errors,
    ));
    body.push_str(&text_input(
        "testCaseNumber",
        "Test-case Number",
        &form.test_case_number,
        "e.g. TC_CHECKOUT_001",
        errors,
    ));

    let kinds: Vec<(&str, &str)> = KindOfTest::ALL
        .iter()
        .map(|k| (k.as_str(), k.label()))
        .collect();
    body.push_str(&select(
        "kindOfTest",
        "Kind of Test",
        "Choose the kind of test",
        &kinds,
        &form.kind_of_test,
        errors,
    ));

    let classes: Vec<(&str, &str)> = Classification::ALL
        .iter()
        .map(|c| (c.as_str(), c.label()))
        .collect();
    body.push_str(&select(
        "classification",
        "Classification",
        "Choose the taxonomy used by the work team",
        &classes,
        &form.classification,
        errors,
    ));

    let levels: Vec<String> = SEVERITY_RANGE.map(|s| s.to_string()).collect();
    let levels: Vec<(&str, &str)> = levels.iter().map(|s| (s.as_str(), s.as_str())).collect();
    body.push_str(&select(
        "severity",
        "Severity",
        "Establish the criticality of error (1 - 5)",
        &levels,
        &form.severity,
        errors,
    ));

    body.push_str(&textarea(
        "stepsToReproduce",
        "Steps to replay the defect",
        &form.steps_to_reproduce,
        errors,
    ));

    body.push_str(&field(
        "realResults",
        "Real Results",
        "<label class=\"dropzone\" for=\"realResults\">\
         <p><strong>Click to upload</strong> or drag and drop</p>\
         <p class=\"hint\">Supported formats: JPEG, PNG, GIF, MP4, PDF, PSD, AI, Word, PPT</p>\
         <input id=\"realResults\" type=\"file\" name=\"realResults\"></label>",
        errors,
    ));

    body.push_str(&textarea(
        "expectedResults",
        "Expected Results",
        &form.expected_results,
        errors,
    ));
    body.push_str(&text_input(
        "version",
        "Version",
        &form.version,
        "e.g. 2.1.0",
        errors,
    ));
    body.push_str(&textarea(
        "additionalInformation",
        "Additional information",
        &form.additional_information,
        errors,
    ));

    body.push_str("<button type=\"submit\">Submit</button>\n</form>\n</div></main>\n");
    body.push_str(SUBMIT_SCRIPT);

    page("Defect record", &body)
}

fn field(name: &str, label: &str, control: &str, errors: &FieldErrors) -> String {
    let message = errors
        .get(name)
        .map(|m| format!("<p class=\"error\" id=\"{}-error\">{}</p>", name, escape(m)))
        .unwrap_or_default();
    format!(
        "<div class=\"field\"><label for=\"{}\">{}</label>{}{}</div>\n",
        name, label, control, message
    )
}

fn text_input(
    name: &str,
    label: &str,
    value: &str,
    placeholder: &str,
    errors: &FieldErrors,
) -> String {
    let control = format!(
        "<input id=\"{0}\" type=\"text\" name=\"{0}\" value=\"{1}\" placeholder=\"{2}\">",
        name,
        escape(value),
        escape(placeholder)
    );
    field(name, label, &control, errors)
}

fn textarea(name: &str, label: &str, value: &str, errors: &FieldErrors) -> String {
    let control = format!(
        "<textarea id=\"{0}\" name=\"{0}\">{1}</textarea>",
        name,
        escape(value)
    );
    field(name, label, &control, errors)
}

fn select(
    name: &str,
    label: &str,
    placeholder: &str,
    options: &[(&str, &str)],
    selected: &str,
    errors: &FieldErrors,
) -> String {
    let mut control = format!("<select id=\"{0}\" name=\"{0}\">", name);
    let none_selected = !options.iter().any(|(value, _)| *value == selected);
    control.push_str(&format!(
        "<option value=\"\" disabled{}>{}</option>",
        if none_selected { " selected" } else { "" },
        escape(placeholder)
    ));
    for (value, text) in options {
        control.push_str(&format!(
            "<option value=\"{}\"{}>{}</option>",
            value,
            if *value == selected { " selected" } else { "" },
            text
        ));
    }
    control.push_str("</select>");
    field(name, label, &control, errors)
}

/// Show an empty form.
#[get("/")]
pub async fn new_defect_page() -> HttpResponse {
    let today = Utc::now().date_naive();
    let form = DefectForm::with_defaults(today);
    html_response(
        StatusCode::OK,
        render_form_page(&form, &FieldErrors::new(), today),
    )
}

/// Handle a form submission.
///
/// Success redirects to the confirmation page. A rejected submission is shown
/// again with messages; a failed create is logged and the form is shown again
/// as entered, without a message.
#[post("/")]
pub async fn submit_defect(pool: web::Data<DbPool>, form: web::Form<DefectForm>) -> HttpResponse {
    let form = form.into_inner();
    let today = Utc::now().date_naive();

    let new_defect = match form.to_new_defect(today) {
        Ok(d) => d,
        Err(errors) => {
            return html_response(
                StatusCode::UNPROCESSABLE_ENTITY,
                render_form_page(&form, &errors, today),
            );
        }
    };

    match create_defect(pool.get_ref(), new_defect).await {
        Ok(defect) => HttpResponse::SeeOther()
            .insert_header((header::LOCATION, defect.confirmation_path()))
            .finish(),
        Err(_) => {
            error!(
                test_case = %form.test_case_number,
                "No defect identifier returned; form left on screen"
            );
            html_response(
                StatusCode::OK,
                render_form_page(&form, &FieldErrors::new(), today),
            )
        }
    }
}
