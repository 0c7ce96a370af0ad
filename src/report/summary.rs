use crate::error::RugcheckError;
use crate::models::TokenReport;
use crate::report::severity::{classify, Severity};

/// The fields printed for a token, resolved from a [`TokenReport`].
#[derive(Debug, Clone, PartialEq)]
pub struct TokenSummary {
    pub name: String,
    pub symbol: String,
    pub supply: f64,
    pub risk_name: String,
    pub risk_score: i64,
    pub severity: Severity,
    pub top_holder: String,
    pub lp_locked_pct: f64,
}

impl TokenSummary {
    /// Fails if the report has no risk, holder or market entry, so nothing is
    /// printed for an incomplete report.
    pub fn from_report(report: &TokenReport) -> Result<Self, RugcheckError> {
        let risk = report
            .primary_risk()
            .ok_or(RugcheckError::EmptyCollection("risk"))?;
        let holder = report
            .top_holder()
            .ok_or(RugcheckError::EmptyCollection("top holder"))?;
        let market = report
            .primary_market()
            .ok_or(RugcheckError::EmptyCollection("market"))?;

        Ok(Self {
            name: report.token_meta.name.clone(),
            symbol: report.token_meta.symbol.clone(),
            supply: report.token.supply,
            risk_name: risk.name.clone(),
            risk_score: risk.score,
            severity: classify(risk.score),
            top_holder: holder.owner.clone(),
            lp_locked_pct: market.lp.lp_locked_pct,
        })
    }

    pub fn render(&self, colored: bool) -> String {
        format!(
            "Token Name: {}\n\
             Token Symbol: {}\n\
             Token Supply: {}\n\
             Rug Risk Name: {}\n\
             Rug Risk Score: {}\n\
             Top Holder 1: {}\n\
             LP Locked Percentage: {}\n",
            self.name,
            self.symbol,
            self.supply,
            self.risk_name,
            self.severity.paint(colored),
            self.top_holder,
            self.lp_locked_pct,
        )
    }
}
