use leptos::html::{Div, Section};
use leptos::*;
use std::cell::RefCell;
use std::rc::Rc;
use strum::IntoEnumIterator;

use crate::{
    application::{DatasetOutcome, ViewSelector, VisualizationCoordinator},
    config::VisualizationConfig,
    domain::{
        logging::LogComponent,
        visualization::{SUMMARY_METRICS, VisualizationMode},
    },
    infrastructure::{
        animation::{EntranceAnimation, register_entrance_support},
        echarts::EChartsEngine,
        http::GeoDatasetClient,
    },
};

type Coordinator = VisualizationCoordinator<EChartsEngine>;

const SECTION_STYLES: &str = r#"
.viz-section {
    position: relative;
    padding: 80px 0;
    overflow: hidden;
    font-family: 'SF Pro Display', -apple-system, BlinkMacSystemFont, sans-serif;
    color: white;
    background-image: url('https://images.unsplash.com/photo-1574482620811-1aa16ffe3c82?w=1920&q=80');
    background-size: cover;
    background-position: center;
    background-attachment: fixed;
}

.viz-section::before {
    content: '';
    position: absolute;
    inset: 0;
    background: rgba(10, 22, 40, 0.9);
}

.viz-inner {
    position: relative;
    z-index: 10;
    max-width: 1280px;
    margin: 0 auto;
    padding: 0 16px;
}

.viz-header {
    text-align: center;
    margin-bottom: 48px;
}

.viz-badge {
    display: inline-block;
    padding: 6px 16px;
    border-radius: 9999px;
    background: rgba(0, 204, 255, 0.2);
    color: #00CCFF;
    font-size: 14px;
    font-weight: 500;
    margin-bottom: 16px;
}

.viz-title {
    font-size: 40px;
    font-weight: 700;
    margin-bottom: 16px;
}

.viz-title__accent {
    background: linear-gradient(90deg, #0066CC, #00CCFF);
    -webkit-background-clip: text;
    color: transparent;
}

.viz-subtitle {
    font-size: 18px;
    color: rgba(255, 255, 255, 0.7);
    max-width: 672px;
    margin: 0 auto;
}

.viz-container {
    border-radius: 16px;
    overflow: hidden;
    background: rgba(10, 22, 40, 0.6);
    backdrop-filter: blur(24px);
    border: 1px solid rgba(255, 255, 255, 0.1);
}

.viz-tabs {
    display: flex;
    flex-wrap: wrap;
    border-bottom: 1px solid rgba(255, 255, 255, 0.1);
}

.viz-tab {
    display: flex;
    align-items: center;
    gap: 8px;
    padding: 16px 24px;
    font-size: 14px;
    font-weight: 500;
    border: none;
    background: transparent;
    color: rgba(255, 255, 255, 0.7);
    cursor: pointer;
    transition: all 0.2s;
}

.viz-tab:hover {
    color: white;
    background: rgba(255, 255, 255, 0.05);
}

.viz-tab.active {
    background: linear-gradient(90deg, #0066CC, #00CCFF);
    color: white;
}

.viz-body {
    padding: 24px;
}

.viz-chart-header {
    display: flex;
    align-items: center;
    justify-content: space-between;
    margin-bottom: 16px;
}

.viz-loading-hint {
    margin-left: 8px;
    font-size: 12px;
    color: #00CCFF;
}

.viz-live {
    display: flex;
    align-items: center;
    gap: 8px;
    font-size: 12px;
    color: rgba(255, 255, 255, 0.6);
}

.viz-live__dot {
    width: 8px;
    height: 8px;
    border-radius: 50%;
    background: #00CC66;
    animation: viz-pulse 2s ease-in-out infinite;
}

@keyframes viz-pulse {
    50% { opacity: 0.5; }
}

.viz-chart {
    width: 100%;
    height: 400px;
}

@media (min-width: 1024px) {
    .viz-chart { height: 500px; }
}

.viz-summary {
    margin-top: 32px;
    display: grid;
    grid-template-columns: repeat(2, 1fr);
    gap: 16px;
}

@media (min-width: 768px) {
    .viz-summary { grid-template-columns: repeat(4, 1fr); }
}

.viz-metric {
    text-align: center;
    padding: 16px;
    border-radius: 12px;
    background: rgba(255, 255, 255, 0.05);
    border: 1px solid rgba(255, 255, 255, 0.1);
}

.viz-metric__value {
    font-size: 24px;
    font-weight: 700;
    color: #00CCFF;
}

.viz-metric__unit,
.viz-metric__label {
    font-size: 12px;
    color: rgba(255, 255, 255, 0.6);
}
"#;

/// 🌊 Water-quality data visualization section
#[component]
pub fn VisualizationSection(#[prop(optional)] config: Option<VisualizationConfig>) -> impl IntoView {
    let config = config.unwrap_or_default();

    let coordinator: Rc<RefCell<Coordinator>> = Rc::new(RefCell::new(VisualizationCoordinator::new(
        EChartsEngine::new(),
        config.initial_mode,
    )));
    // Snapshot for rendering; the coordinator holds the authoritative state
    let selector = create_rw_signal(coordinator.borrow().selector());
    let entrance: Rc<RefCell<Option<EntranceAnimation>>> = Rc::new(RefCell::new(None));

    let section_ref = create_node_ref::<Section>();
    let container_ref = create_node_ref::<Div>();
    let chart_ref = create_node_ref::<Div>();

    // Boundary dataset request runs independently of the widget lifecycle
    {
        let load = Coordinator::load_dataset(
            &coordinator,
            GeoDatasetClient::new(config.dataset_url.clone()).fetch(),
        );
        let weak = Rc::downgrade(&coordinator);
        spawn_local(async move {
            if load.await == DatasetOutcome::Loaded {
                if let Some(coordinator) = weak.upgrade() {
                    selector.set(coordinator.borrow().selector());
                }
            }
        });
    }

    // Mount the widget and the entrance trigger once the DOM exists
    {
        let coordinator = Rc::clone(&coordinator);
        let entrance = Rc::clone(&entrance);
        let config = config.clone();
        create_effect(move |mounted: Option<bool>| {
            if mounted == Some(true) {
                return true;
            }
            let (Some(chart), Some(section), Some(container)) =
                (chart_ref.get(), section_ref.get(), container_ref.get())
            else {
                return false;
            };

            let surface: web_sys::HtmlElement = (*chart).clone().into();
            if let Err(e) = coordinator.borrow_mut().mount(&surface) {
                crate::log_error!(LogComponent::Presentation("VisualizationSection"), "❌ Chart mount failed: {}", e);
            }

            register_entrance_support(&config);
            *entrance.borrow_mut() = Some(EntranceAnimation::attach(
                (*section).clone().into(),
                (*container).clone().into(),
                config.entrance_threshold,
            ));
            true
        });
    }

    {
        let coordinator = Rc::clone(&coordinator);
        on_cleanup(move || {
            if let Some(animation) = entrance.borrow_mut().take() {
                animation.detach();
            }
            coordinator.borrow_mut().unmount();
        });
    }

    let on_select = Callback::new(move |mode: VisualizationMode| {
        let mut coordinator = coordinator.borrow_mut();
        if let Err(e) = coordinator.select_mode(mode) {
            crate::log_warn!(LogComponent::Presentation("VisualizationSection"), "⚠️ Could not redraw chart: {}", e);
        }
        selector.set(coordinator.selector());
    });

    view! {
        <section id="visualization" class="viz-section" node_ref=section_ref>
            <style>{SECTION_STYLES}</style>
            <div class="viz-inner">
                <SectionHeader />
                <div class="viz-container" node_ref=container_ref>
                    <TabBar selector=selector on_select=on_select />
                    <div class="viz-body">
                        <ChartHeader selector=selector />
                        <div id=config.surface_id.clone() class="viz-chart" node_ref=chart_ref></div>
                    </div>
                </div>
                <DataSummary />
            </div>
        </section>
    }
}

#[component]
fn SectionHeader() -> impl IntoView {
    view! {
        <div class="viz-header">
            <span class="viz-badge">"数据可视化"</span>
            <h2 class="viz-title">
                "实时数据，"<span class="viz-title__accent">"一目了然"</span>
            </h2>
            <p class="viz-subtitle">"多维度数据可视化展示，助力科学决策"</p>
        </div>
    }
}

/// One tab per visualization mode
#[component]
fn TabBar(selector: RwSignal<ViewSelector>, on_select: Callback<VisualizationMode>) -> impl IntoView {
    view! {
        <div class="viz-tabs" role="tablist">
            {VisualizationMode::iter()
                .map(|mode| {
                    view! {
                        <button
                            id=format!("viz-tab-{}", mode.tab_id())
                            class="viz-tab"
                            class:active=move || selector.with(|s| s.mode() == mode)
                            on:click=move |_| on_select.call(mode)
                        >
                            <span>{mode.icon()}</span>
                            {mode.to_string()}
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}

#[component]
fn ChartHeader(selector: RwSignal<ViewSelector>) -> impl IntoView {
    view! {
        <div class="viz-chart-header">
            <h3>
                {move || format!("{}图表", selector.with(|s| s.mode()))}
                <Show when=move || selector.with(|s| s.is_waiting_for_dataset())>
                    <span class="viz-loading-hint">"(加载中...)"</span>
                </Show>
            </h3>
            <div class="viz-live">
                <span class="viz-live__dot"></span>
                <span>"实时更新"</span>
            </div>
        </div>
    }
}

#[component]
fn DataSummary() -> impl IntoView {
    view! {
        <div class="viz-summary">
            {SUMMARY_METRICS
                .iter()
                .map(|metric| {
                    view! {
                        <div class="viz-metric">
                            <div class="viz-metric__value">
                                {metric.value}
                                <span class="viz-metric__unit">{metric.unit}</span>
                            </div>
                            <div class="viz-metric__label">{metric.label}</div>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}
