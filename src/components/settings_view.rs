use yew::prelude::*;

use crate::components::credential::CredentialPanel;
use crate::components::login::AccountBlock;
use crate::components::maintenance::MaintenancePanel;
use crate::components::notice::{Notice, NoticeBanner};
use crate::components::segmented::{
    DiagramDaysSegmented, InfoTypeSegmented, ItemCountSegmented, PeriodUnitSegmented,
};
use crate::hooks::use_session::use_session;
use crate::hooks::use_settings::use_settings;
use crate::models::settings::SettingsField;
use web_sys::HtmlInputElement;

/// Settings page: display preferences, clipboard backup and restore, account
/// control, and the admin-only panels.
#[function_component(SettingsView)]
pub fn settings_view() -> Html {
    let notice = use_state(|| None::<Notice>);
    let notify = {
        let notice = notice.clone();
        Callback::from(move |value| notice.set(Some(value)))
    };
    let on_dismiss = {
        let notice = notice.clone();
        Callback::from(move |()| notice.set(None))
    };

    let handle = use_settings(notify.clone());
    let session = use_session();
    let role = session.data().and_then(|role| (**role).clone());

    let settings = handle.settings.clone();

    let on_diagram_days = {
        let update_field = handle.update_field.clone();
        Callback::from(move |value| update_field.emit(SettingsField::DiagramDays(value)))
    };
    let on_diagram_type = {
        let update_field = handle.update_field.clone();
        Callback::from(move |value| update_field.emit(SettingsField::DiagramType(value)))
    };
    let on_chart_time_range = {
        let update_field = handle.update_field.clone();
        Callback::from(move |value| update_field.emit(SettingsField::ChartTimeRange(value)))
    };
    let on_chart_items_count = {
        let update_field = handle.update_field.clone();
        Callback::from(move |value| update_field.emit(SettingsField::ChartItemsCount(value)))
    };

    let on_export = {
        let export = handle.export_to_clipboard.clone();
        Callback::from(move |_| export.emit(()))
    };
    let on_import = {
        let import = handle.import_from_clipboard.clone();
        Callback::from(move |_| import.emit(()))
    };
    let on_reset = {
        let reset = handle.reset.clone();
        Callback::from(move |_| reset.emit(()))
    };

    html! {
        <div class="settings-view">
            <NoticeBanner notice={(*notice).clone()} {on_dismiss} />

            <h2 class="section-title">{"Data Showing"}</h2>

            <SettingsTile title="Default Line Chart Days Range">
                <DiagramDaysSegmented value={settings.diagram_days} on_change={on_diagram_days} />
            </SettingsTile>

            <SettingsTile title="Default Diagrams Data Type">
                <InfoTypeSegmented value={settings.diagram_type} on_change={on_diagram_type} />
            </SettingsTile>

            <SettingsTile title="Default Chart Period">
                <PeriodUnitSegmented value={settings.chart_time_range} on_change={on_chart_time_range} />
            </SettingsTile>

            <SettingsTile title="Default Chart Items">
                <ItemCountSegmented value={settings.chart_items_count} on_change={on_chart_items_count} />
            </SettingsTile>

            <h2 class="section-title">{"Usage List Converting"}</h2>

            { toggle_tile("Points Spreading", settings.usage_spreading, false,
                &handle.update_field, SettingsField::UsageSpreading) }
            { toggle_tile("Points Smoothing", settings.usage_smoothing, false,
                &handle.update_field, SettingsField::UsageSmoothing) }
            { toggle_tile("Points Smart Merge", settings.usage_smart_merge, false,
                &handle.update_field, SettingsField::UsageSmartMerge) }
            { toggle_tile("Usage/Hour as Unit", settings.usage_pre_hour_unit, true,
                &handle.update_field, SettingsField::UsagePreHourUnit) }

            <h2 class="section-title">{"Import/Export & Reset All"}</h2>

            <button class="button primary wide" onclick={on_export}>
                {"Copy Settings JSON to Clipboard"}
            </button>
            <button class="button wide" onclick={on_import}>
                {"Import Settings From Clipboard"}
            </button>
            <button class="button danger wide" onclick={on_reset}>
                {"Reset All Settings"}
            </button>

            <h2 class="section-title">{"Settings JSON"}</h2>
            <pre class="settings-json">{settings.to_json_pretty()}</pre>

            <h2 class="section-title">{"Account"}</h2>
            <AccountBlock notify={notify.clone()} />

            <h2 class="section-title">{"Collector Credential"}</h2>
            <CredentialPanel role={role.clone()} notify={notify.clone()} />

            <h2 class="section-title">{"Records Maintenance"}</h2>
            <MaintenancePanel {role} notify={notify.clone()} />
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct SettingsTileProps {
    title: String,
    children: Children,
}

#[function_component(SettingsTile)]
fn settings_tile(props: &SettingsTileProps) -> Html {
    html! {
        <div class="settings-tile">
            <p class="settings-tile-title">{&props.title}</p>
            { props.children.clone() }
        </div>
    }
}

/// Switch tile bound to one boolean settings field.
fn toggle_tile(
    title: &'static str,
    checked: bool,
    disabled: bool,
    update_field: &Callback<SettingsField>,
    field: fn(bool) -> SettingsField,
) -> Html {
    let onchange = {
        let update_field = update_field.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            update_field.emit(field(input.checked()));
        })
    };

    html! {
        <div class="settings-tile">
            <p class="settings-tile-title">{title}</p>
            <input type="checkbox" class="switch" {checked} {disabled} {onchange} />
        </div>
    }
}
