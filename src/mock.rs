// 📦 Mock Data - Hard-coded placeholder content rendered in cards
//
// Nothing here is computed. Amounts are display strings, exactly as they
// appear on screen.

use ratatui::style::Color;

// ============================================================================
// PARCEL STATUS
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParcelStatus {
    AwaitingPickup,
    InTransit,
    Delivered,
    Returned,
}

impl ParcelStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ParcelStatus::AwaitingPickup => "Awaiting Pickup",
            ParcelStatus::InTransit => "In Transit",
            ParcelStatus::Delivered => "Delivered",
            ParcelStatus::Returned => "Returned",
        }
    }

    pub fn color(&self) -> Color {
        match self {
            ParcelStatus::AwaitingPickup => Color::Yellow,
            ParcelStatus::InTransit => Color::Cyan,
            ParcelStatus::Delivered => Color::Green,
            ParcelStatus::Returned => Color::Red,
        }
    }
}

// ============================================================================
// DASHBOARD
// ============================================================================

#[derive(Debug, Clone, Copy)]
pub struct StatCard {
    pub label: &'static str,
    pub value: &'static str,
    pub hint: &'static str,
}

pub static DASHBOARD_STATS: [StatCard; 4] = [
    StatCard {
        label: "Parcels Today",
        value: "128",
        hint: "+12 from yesterday",
    },
    StatCard {
        label: "Awaiting Pickup",
        value: "34",
        hint: "8 older than 24h",
    },
    StatCard {
        label: "Out for Delivery",
        value: "42",
        hint: "12 riders active",
    },
    StatCard {
        label: "Delivered",
        value: "86",
        hint: "97% on time",
    },
];

#[derive(Debug, Clone, Copy)]
pub struct RecentParcel {
    pub tracking_id: &'static str,
    pub receiver: &'static str,
    pub destination: &'static str,
    pub status: ParcelStatus,
}

pub static RECENT_PARCELS: [RecentParcel; 6] = [
    RecentParcel {
        tracking_id: "PKG-20418",
        receiver: "Amaka Obi",
        destination: "Lekki Phase 1",
        status: ParcelStatus::InTransit,
    },
    RecentParcel {
        tracking_id: "PKG-20417",
        receiver: "Tunde Bakare",
        destination: "Ikeja GRA",
        status: ParcelStatus::Delivered,
    },
    RecentParcel {
        tracking_id: "PKG-20416",
        receiver: "Chioma Eze",
        destination: "Yaba",
        status: ParcelStatus::AwaitingPickup,
    },
    RecentParcel {
        tracking_id: "PKG-20415",
        receiver: "Ibrahim Musa",
        destination: "Surulere",
        status: ParcelStatus::Delivered,
    },
    RecentParcel {
        tracking_id: "PKG-20414",
        receiver: "Funke Adeyemi",
        destination: "Victoria Island",
        status: ParcelStatus::Returned,
    },
    RecentParcel {
        tracking_id: "PKG-20413",
        receiver: "Emeka Nwosu",
        destination: "Ajah",
        status: ParcelStatus::InTransit,
    },
];

// ============================================================================
// COST BREAKDOWN (static, shown on the costs and review steps)
// ============================================================================

pub static COST_BREAKDOWN: [(&str, &str); 4] = [
    ("Base delivery fee", "₦1,500.00"),
    ("Distance surcharge", "₦500.00"),
    ("Handling", "₦200.00"),
    ("VAT (7.5%)", "₦165.00"),
];

pub const COST_TOTAL: (&str, &str) = ("Total", "₦2,365.00");

// ============================================================================
// SUBMISSIONS
// ============================================================================

#[derive(Debug, Clone, Copy)]
pub struct Submission {
    pub tracking_id: &'static str,
    pub sender: &'static str,
    pub receiver: &'static str,
    pub destination: &'static str,
    pub delivery_fee: &'static str,
    pub pod_attached: bool,
    pub submitted_by: &'static str,
    pub submitted_at: &'static str,
    pub status: ParcelStatus,
}

pub static SUBMISSIONS: [Submission; 4] = [
    Submission {
        tracking_id: "PKG-20418",
        sender: "Kemi Oladipo",
        receiver: "Amaka Obi",
        destination: "12 Admiralty Way, Lekki Phase 1",
        delivery_fee: "₦2,500",
        pod_attached: false,
        submitted_by: "Intake Desk A",
        submitted_at: "09:42",
        status: ParcelStatus::InTransit,
    },
    Submission {
        tracking_id: "PKG-20417",
        sender: "Segun Afolabi",
        receiver: "Tunde Bakare",
        destination: "4 Oduduwa Crescent, Ikeja GRA",
        delivery_fee: "₦2,000",
        pod_attached: true,
        submitted_by: "Intake Desk B",
        submitted_at: "09:15",
        status: ParcelStatus::Delivered,
    },
    Submission {
        tracking_id: "PKG-20416",
        sender: "Ngozi Okafor",
        receiver: "Chioma Eze",
        destination: "27 Herbert Macaulay Way, Yaba",
        delivery_fee: "₦1,500",
        pod_attached: false,
        submitted_by: "Intake Desk A",
        submitted_at: "08:58",
        status: ParcelStatus::AwaitingPickup,
    },
    Submission {
        tracking_id: "PKG-20414",
        sender: "Bola Ahmed",
        receiver: "Funke Adeyemi",
        destination: "Plot 1415 Adetokunbo Ademola, Victoria Island",
        delivery_fee: "₦3,000",
        pod_attached: true,
        submitted_by: "Intake Desk C",
        submitted_at: "08:21",
        status: ParcelStatus::Returned,
    },
];

// ============================================================================
// RIDER RECONCILIATION
// ============================================================================

#[derive(Debug, Clone, Copy)]
pub struct ReconciliationSummary {
    pub rider: &'static str,
    pub shift: &'static str,
    pub parcels_assigned: &'static str,
    pub parcels_delivered: &'static str,
    pub parcels_returned: &'static str,
    pub cash_expected: &'static str,
    pub cash_collected: &'static str,
    pub balance: &'static str,
}

pub static RIDER_RECONCILIATION: ReconciliationSummary = ReconciliationSummary {
    rider: "Musa Danjuma",
    shift: "Morning shift, Lekki route",
    parcels_assigned: "24",
    parcels_delivered: "21",
    parcels_returned: "3",
    cash_expected: "₦45,500.00",
    cash_collected: "₦45,500.00",
    balance: "₦0.00",
};
