//! Shared test utilities and Mother pattern factories.
//!
//! Use these helpers instead of spelling out full records in every test.
#![allow(dead_code)]

use uuid::Uuid;

use crate::constants::ROOT_COLLECTIVE_SLUG;
use crate::domain::transaction::{Host, PaymentMethod};
use crate::domain::user::{MemberRole, Membership};
use crate::domain::{Collective, CollectiveRef, Ledger, LoggedInUser, Transaction, TransactionType};

// ============================================================================
// Mother Pattern Factories
// ============================================================================

pub struct TransactionMother;

impl TransactionMother {
    fn base(uuid: &str, kind: TransactionType, amount: i64, currency: &str) -> Transaction {
        Transaction {
            uuid: Uuid::parse_str(uuid).expect("fixture uuid"),
            kind,
            description: None,
            created_at: None,
            amount,
            currency: currency.to_string(),
            host_currency: None,
            host_currency_fx_rate: None,
            host_fee_in_host_currency: None,
            platform_fee_in_host_currency: None,
            payment_processor_fee_in_host_currency: None,
            net_amount_in_collective_currency: Some(amount),
            attachment: None,
            payment_method: None,
            host: None,
            refund_transaction: None,
        }
    }

    /// A plain donation without fees.
    #[must_use]
    pub fn credit(amount: i64, currency: &str) -> Transaction {
        Transaction {
            description: Some("Monthly donation".to_string()),
            ..Self::base(
                "5d1a6b1e-3f0a-4c1b-8e2f-7a9b0c1d2e3f",
                TransactionType::Credit,
                amount,
                currency,
            )
        }
    }

    /// An expense without receipt.
    #[must_use]
    pub fn expense(amount: i64, currency: &str) -> Transaction {
        Transaction {
            description: Some("Server hosting".to_string()),
            ..Self::base(
                "9f8e7d6c-5b4a-4321-9876-0fedcba98765",
                TransactionType::Debit,
                amount,
                currency,
            )
        }
    }

    /// A $100 donation paying all three fees through Stripe.
    #[must_use]
    pub fn with_all_fees() -> Transaction {
        Transaction {
            host_currency: Some("USD".to_string()),
            host_fee_in_host_currency: Some(-1000),
            platform_fee_in_host_currency: Some(-500),
            payment_processor_fee_in_host_currency: Some(-320),
            net_amount_in_collective_currency: Some(8180),
            payment_method: Some(PaymentMethod {
                service: Some("stripe".to_string()),
                name: Some("4242".to_string()),
                method_type: Some("creditcard".to_string()),
            }),
            host: Some(Host {
                slug: Some("opensource".to_string()),
                name: Some("Open Source Collective".to_string()),
                host_fee_percent: Some(10.0),
            }),
            ..Self::base(
                "0c9b8a7f-6e5d-4c3b-a291-8f7e6d5c4b3a",
                TransactionType::Credit,
                10000,
                "USD",
            )
        }
    }

    /// A €25.50 donation converted to a USD host.
    #[must_use]
    pub fn converted() -> Transaction {
        Transaction {
            host_currency: Some("USD".to_string()),
            host_currency_fx_rate: Some(1.1),
            platform_fee_in_host_currency: Some(-140),
            net_amount_in_collective_currency: Some(2423),
            ..Self::base(
                "1a2b3c4d-5e6f-4a8b-9c0d-1e2f3a4b5c6d",
                TransactionType::Credit,
                2550,
                "EUR",
            )
        }
    }
}

pub struct CollectiveMother;

impl CollectiveMother {
    #[must_use]
    pub fn webpack() -> Collective {
        Collective {
            id: 42,
            slug: "webpack".to_string(),
            name: Some("webpack".to_string()),
            currency: Some("USD".to_string()),
            host: Some(CollectiveRef {
                id: Some(11004),
                slug: "opensource".to_string(),
            }),
        }
    }
}

pub struct UserMother;

impl UserMother {
    /// A user with a single membership.
    #[must_use]
    pub fn with_role(slug: &str, role: MemberRole) -> LoggedInUser {
        LoggedInUser {
            id: 7,
            username: Some("xdamman".to_string()),
            collective: Some(CollectiveRef {
                id: Some(700),
                slug: "xdamman".to_string(),
            }),
            member_of: vec![Membership {
                collective: CollectiveRef {
                    id: None,
                    slug: slug.to_string(),
                },
                role,
            }],
        }
    }

    /// A user whose own profile is the collective `slug`.
    #[must_use]
    pub fn owner_of(slug: &str) -> LoggedInUser {
        LoggedInUser {
            id: 8,
            username: Some(slug.to_string()),
            collective: Some(CollectiveRef {
                id: None,
                slug: slug.to_string(),
            }),
            member_of: Vec::new(),
        }
    }

    /// An admin of the platform collective.
    #[must_use]
    pub fn root() -> LoggedInUser {
        Self::with_role(ROOT_COLLECTIVE_SLUG, MemberRole::Admin)
    }
}

pub struct LedgerMother;

impl LedgerMother {
    /// The webpack ledger viewed by a root user.
    #[must_use]
    pub fn sample() -> Ledger {
        Ledger {
            collective: CollectiveMother::webpack(),
            logged_in_user: Some(UserMother::root()),
            transactions: vec![
                TransactionMother::expense(-2550, "USD"),
                TransactionMother::with_all_fees(),
                TransactionMother::converted(),
            ],
        }
    }

    /// The webpack ledger viewed anonymously.
    #[must_use]
    pub fn anonymous() -> Ledger {
        Ledger {
            logged_in_user: None,
            ..Self::sample()
        }
    }
}

// ============================================================================
// Rendering Helpers
// ============================================================================

/// Flattens a buffer into lines of symbols for content assertions.
#[must_use]
pub fn buffer_to_string(buffer: &ratatui::buffer::Buffer) -> String {
    let area = buffer.area;
    (area.top()..area.bottom())
        .map(|y| {
            (area.left()..area.right())
                .map(|x| buffer[(x, y)].symbol())
                .collect::<String>()
        })
        .collect::<Vec<_>>()
        .join("\n")
}
