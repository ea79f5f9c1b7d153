use askama::Template;

use crate::navigation::route;

/// Chart page; `data` and `ticks` are JSON handed to the charting script.
#[derive(Template)]
#[template(path = "metrics.html")]
pub struct MetricsTemplate {
    pub data: String,
    pub ticks: String,
}

crate::impl_page_template!(MetricsTemplate, route::METRICS);
