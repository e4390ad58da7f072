//! State of the sales calculator form, independent of rendering.
//!
//! Phases: `Idle` (nothing selected), `Ready` (shop selected, no data),
//! `Loading` (product fetch in flight), `Result` and `Error`. Every change goes
//! through a transition method so the component only forwards events.

use contracts::usecases::u601_sales_calculator::{
    aggregate_sales, render_csv, report_filename, FetchError, Product, ReportColumns,
    SalesError, SalesReport, Shop,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Ready,
    Loading,
    Result,
    Error,
}

/// Identifies one dispatched product fetch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestTicket {
    pub seq: u64,
    pub shop_id: i64,
}

/// Products of one shop together with their aggregated sales
#[derive(Debug, Clone, PartialEq)]
pub struct ShopReport {
    pub shop_id: i64,
    pub products: Vec<Product>,
    pub report: SalesReport,
}

/// CSV file ready for download
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportExport {
    pub filename: String,
    pub content: String,
}

impl ShopReport {
    pub fn to_export(&self, filename_prefix: &str) -> Result<ReportExport, SalesError> {
        Ok(ReportExport {
            filename: report_filename(filename_prefix, self.shop_id),
            content: render_csv(&self.report, &ReportColumns::default())?,
        })
    }
}

#[derive(Debug, Clone, Default)]
pub struct SalesCalculatorState {
    pub shops: Vec<Shop>,
    pub selected_shop_id: Option<i64>,
    pub result: Option<ShopReport>,
    pub is_loading: bool,
    pub error: Option<String>,
    /// Sequence number of the last dispatched product fetch
    last_seq: u64,
    /// Sequence number whose completion will be applied
    pending_seq: Option<u64>,
}

impl SalesCalculatorState {
    /// A shop list error without a selection stays `Idle`; `Error` is only
    /// reached from a product fetch.
    pub fn phase(&self) -> Phase {
        if self.is_loading {
            Phase::Loading
        } else if self.error.is_some() && self.selected_shop_id.is_some() {
            Phase::Error
        } else if self.result.is_some() {
            Phase::Result
        } else if self.selected_shop_id.is_some() {
            Phase::Ready
        } else {
            Phase::Idle
        }
    }

    /// Completion of the shop directory fetch
    pub fn shops_loaded(&mut self, outcome: Result<Vec<Shop>, FetchError>) {
        match outcome {
            Ok(shops) => {
                log::info!("Loaded {} shops", shops.len());
                self.shops = shops;
            }
            Err(e) => {
                log::error!("Failed to load shop list: {}", e);
                self.error = Some(format!("Error fetching shop list: {}", e));
            }
        }
    }

    /// Picks a shop; a different shop drops the previous result, error and any
    /// request still in flight
    pub fn select_shop(&mut self, shop_id: i64) {
        if self.selected_shop_id == Some(shop_id) {
            return;
        }

        if let Some(seq) = self.pending_seq.take() {
            log::debug!("Shop changed, request #{} will be ignored", seq);
        }
        self.selected_shop_id = Some(shop_id);
        self.is_loading = false;
        self.error = None;
        self.result = None;
    }

    pub fn can_calculate(&self) -> bool {
        self.selected_shop_id.is_some() && !self.is_loading
    }

    /// Starts a product fetch for the selected shop.
    ///
    /// Returns `None` when nothing is selected or a fetch is already running.
    pub fn begin_calculate(&mut self) -> Option<RequestTicket> {
        if !self.can_calculate() {
            return None;
        }
        let shop_id = self.selected_shop_id?;

        self.last_seq += 1;
        self.pending_seq = Some(self.last_seq);
        self.is_loading = true;
        self.error = None;

        Some(RequestTicket {
            seq: self.last_seq,
            shop_id,
        })
    }

    /// Applies the outcome of a product fetch.
    ///
    /// Returns `false` if the ticket is no longer current and the outcome was
    /// discarded.
    pub fn finish_calculate(
        &mut self,
        ticket: RequestTicket,
        outcome: Result<Vec<Product>, SalesError>,
    ) -> bool {
        if self.pending_seq != Some(ticket.seq) {
            log::warn!(
                "Discarding stale response #{} for shop {}",
                ticket.seq,
                ticket.shop_id
            );
            return false;
        }
        self.pending_seq = None;
        self.is_loading = false;

        let computed = outcome.and_then(|products| {
            let report = aggregate_sales(&products)?;
            Ok(ShopReport {
                shop_id: ticket.shop_id,
                products,
                report,
            })
        });

        match computed {
            Ok(result) => {
                log::info!(
                    "Shop {}: {} products, total {}",
                    result.shop_id,
                    result.products.len(),
                    result.report.total
                );
                self.error = None;
                self.result = Some(result);
            }
            Err(e) => {
                log::error!("Sales calculation for shop {} failed: {}", ticket.shop_id, e);
                self.error = Some(format!(
                    "Error fetching or processing data. Please try again. Details: {}",
                    e
                ));
                self.result = None;
            }
        }
        true
    }

    /// CSV export of the current result, if any
    pub fn export(&self, filename_prefix: &str) -> Option<Result<ReportExport, SalesError>> {
        self.result
            .as_ref()
            .map(|result| result.to_export(filename_prefix))
    }
}
