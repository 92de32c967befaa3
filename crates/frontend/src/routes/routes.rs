use crate::dashboards::d100_supplier_overview::SupplierDashboard;
use crate::domain::a001_company_info::ui::CompanyWizard;
use crate::domain::a002_environment::ui::EnvironmentWizard;
use crate::domain::a003_social::ui::SocialWizard;
use crate::domain::a004_governance::ui::GovernanceWizard;
use crate::domain::a005_quality::ui::QualityWizard;
use crate::domain::a006_submission::ui::AdminPortal;
use crate::layout::portal_context::{use_portal_config, PortalMode};
use crate::layout::Shell;
use crate::shared::http;
use crate::shared::icons::icon;
use crate::usecases::u901_partner_signup::PartnerSignupForm;
use leptos::prelude::*;

/// Outcome of the startup connectivity probe.
#[derive(Clone, PartialEq, Eq)]
enum ProbeState {
    Checking,
    Ready,
    /// Fatal: the screen is replaced and only a reload can recover
    Failed(String),
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum SupplierArea {
    Dashboard,
    Company,
    Environment,
    Social,
    Governance,
    Quality,
    Partner,
}

impl SupplierArea {
    fn title(&self) -> &'static str {
        match self {
            SupplierArea::Dashboard => "Dashboard",
            SupplierArea::Company => "Company",
            SupplierArea::Environment => "Environment",
            SupplierArea::Social => "Social",
            SupplierArea::Governance => "Governance",
            SupplierArea::Quality => "Quality",
            SupplierArea::Partner => "Partner signup",
        }
    }

    fn all() -> [SupplierArea; 7] {
        [
            SupplierArea::Dashboard,
            SupplierArea::Company,
            SupplierArea::Environment,
            SupplierArea::Social,
            SupplierArea::Governance,
            SupplierArea::Quality,
            SupplierArea::Partner,
        ]
    }
}

#[component]
fn ConnectionErrorPage(message: String) -> impl IntoView {
    let handle_reload = move |_| {
        if let Some(window) = web_sys::window() {
            _ = window.location().reload();
        }
    };

    view! {
        <div class="connection-error">
            <h2>"Cannot reach the server"</h2>
            <p class="connection-error__detail">{message}</p>
            <button class="btn btn-primary" on:click=handle_reload>
                {icon("refresh")}
                "Reload"
            </button>
        </div>
    }
}

#[component]
fn SupplierPortal() -> impl IntoView {
    let active = RwSignal::new(SupplierArea::Dashboard);

    view! {
        <Shell
            title="ESG Supplier Portal"
            nav=move || {
                SupplierArea::all()
                    .into_iter()
                    .map(|area| {
                        let class = move || {
                            if active.get() == area {
                                "nav-tab nav-tab--active"
                            } else {
                                "nav-tab"
                            }
                        };
                        view! {
                            <button class=class on:click=move |_| active.set(area)>
                                {area.title()}
                            </button>
                        }
                    })
                    .collect_view()
                    .into_any()
            }
        >
            {move || match active.get() {
                SupplierArea::Dashboard => view! { <SupplierDashboard /> }.into_any(),
                SupplierArea::Company => view! { <CompanyWizard /> }.into_any(),
                SupplierArea::Environment => view! { <EnvironmentWizard /> }.into_any(),
                SupplierArea::Social => view! { <SocialWizard /> }.into_any(),
                SupplierArea::Governance => view! { <GovernanceWizard /> }.into_any(),
                SupplierArea::Quality => view! { <QualityWizard /> }.into_any(),
                SupplierArea::Partner => view! { <PartnerSignupForm /> }.into_any(),
            }}
        </Shell>
    }
}

#[component]
fn AdminShell() -> impl IntoView {
    view! {
        <Shell title="ESG Review Console" nav=|| ().into_any()>
            <AdminPortal />
        </Shell>
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    let config = use_portal_config();
    let probe = RwSignal::new(ProbeState::Checking);

    wasm_bindgen_futures::spawn_local(async move {
        match http::get_ack("/esg/test").await {
            Ok(()) => probe.set(ProbeState::Ready),
            Err(e) => {
                log::error!("connectivity probe failed: {}", e);
                probe.set(ProbeState::Failed(e));
            }
        }
    });

    view! {
        {move || match probe.get() {
            ProbeState::Checking => {
                view! { <div class="portal-splash">"Connecting..."</div> }.into_any()
            }
            ProbeState::Failed(message) => {
                view! { <ConnectionErrorPage message=message /> }.into_any()
            }
            ProbeState::Ready => match config.mode {
                PortalMode::Supplier => view! { <SupplierPortal /> }.into_any(),
                PortalMode::Admin => view! { <AdminShell /> }.into_any(),
            },
        }}
    }
}
