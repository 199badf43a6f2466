pub const TEMPLATE_FILE_NAME: &str = "client-analysis-dashboard-template.html";

pub const USAGE: &str = "Usage: dashgen <data.json> <output.html>";
pub const USAGE_EXAMPLE: &str = "Example: dashgen example-data.json client-dashboard.html";

pub const NEXT_STEPS: [&str; 4] = [
    "1. Update chart data in <script> section",
    "2. Modify stats grid numbers",
    "3. Customize findings and recommendations",
    "4. Adjust colors if needed",
];

/// Field under the `client` object that feeds a replacement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientField {
    Name,
    ProjectType,
    Date,
    Analyst,
}

impl ClientField {
    pub fn key(self) -> &'static str {
        match self {
            ClientField::Name => "name",
            ClientField::ProjectType => "projectType",
            ClientField::Date => "date",
            ClientField::Analyst => "analyst",
        }
    }
}

/// Fallback used when the data document does not supply a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DefaultValue {
    Text(&'static str),
    /// Current local date, e.g. `October 30, 2025`.
    Today,
}

#[derive(Debug, Clone, Copy)]
pub struct ReplacementRule {
    pub search: &'static str,
    pub field: ClientField,
    pub default: DefaultValue,
}

/// Applied in this order.
pub const REPLACEMENT_RULES: [ReplacementRule; 4] = [
    ReplacementRule {
        search: "BookingBrain",
        field: ClientField::Name,
        default: DefaultValue::Text("Client Name"),
    },
    ReplacementRule {
        search: "Database Analysis",
        field: ClientField::ProjectType,
        default: DefaultValue::Text("System Analysis"),
    },
    ReplacementRule {
        search: "October 30, 2025",
        field: ClientField::Date,
        default: DefaultValue::Today,
    },
    ReplacementRule {
        search: "Leonid Shvorob",
        field: ClientField::Analyst,
        default: DefaultValue::Text("Analyst Name"),
    },
];

pub const DATE_FORMAT: &str = "%B %-d, %Y";
