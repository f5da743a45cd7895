//! WebKitGTK configuration and engine callbacks.

use tracing::{debug, info};
use webkit2gtk::{
    CacheModel as WebKitCacheModel, CookieAcceptPolicy, CookieManagerExt, CookiePersistentStorage,
    HardwareAccelerationPolicy, LoadEvent, PolicyDecisionExt, PolicyDecisionType, SettingsExt,
    UserContentInjectedFrames, UserContentManagerExt, UserScript, UserScriptInjectionTime,
    WebContextExt, WebView, WebViewExt,
};

use crate::config::CacheModel;
use crate::policy::{self, DecisionKind, LoadStage, Verdict};
use crate::profile::EngineProfile;

/// Apply `profile` to a freshly created view, before it loads anything.
pub fn configure(webview: &WebView, profile: &EngineProfile) {
    if let Some(settings) = WebViewExt::settings(webview) {
        settings.set_enable_javascript(profile.javascript);
        settings.set_enable_webgl(profile.webgl);
        settings.set_enable_webaudio(profile.webaudio);
        settings.set_enable_media_stream(profile.media_stream);
        #[allow(deprecated)]
        settings.set_enable_accelerated_2d_canvas(profile.accelerated_2d_canvas);
        settings.set_enable_write_console_messages_to_stdout(profile.console_to_stdout);
        settings.set_javascript_can_access_clipboard(profile.javascript_can_access_clipboard);
        settings.set_enable_back_forward_navigation_gestures(profile.back_forward_gestures);
        settings.set_enable_smooth_scrolling(profile.smooth_scrolling);
        settings.set_hardware_acceleration_policy(if profile.always_accelerate {
            HardwareAccelerationPolicy::Always
        } else {
            HardwareAccelerationPolicy::OnDemand
        });
        settings.set_user_agent(Some(&profile.user_agent));
    }

    if let Some(context) = webview.context() {
        context.set_cache_model(cache_model(profile.cache_model));
        if let Some(cookies) = context.cookie_manager() {
            cookies.set_persistent_storage(
                &profile.cookie_store.to_string_lossy(),
                CookiePersistentStorage::Text,
            );
            cookies.set_accept_policy(CookieAcceptPolicy::Always);
        }
    }

    if let Some(source) = &profile.touch_script {
        inject_touch_bridge(webview, source);
    }
}

/// Register `source` to run in every frame before the page's own scripts.
fn inject_touch_bridge(webview: &WebView, source: &str) {
    let Some(manager) = webview.user_content_manager() else {
        return;
    };
    let script = UserScript::new(
        source,
        UserContentInjectedFrames::AllFrames,
        UserScriptInjectionTime::Start,
        &[],
        &[],
    );
    manager.add_script(&script);
    debug!(bytes = source.len(), "touch bridge registered");
}

/// Hook up navigation policy and load logging.
pub fn connect_callbacks(webview: &WebView) {
    webview.connect_decide_policy(|_, decision, kind| {
        let kind = decision_kind(kind);
        let verdict = policy::decide(kind);
        debug!(kind = ?kind, verdict = ?verdict, "policy decision");
        match verdict {
            Verdict::Use => decision.use_(),
            Verdict::Default => {}
        }
        verdict.is_handled()
    });

    webview.connect_load_changed(|view, event| {
        let Some(stage) = load_stage(event) else {
            return;
        };
        match stage {
            LoadStage::Finished => {
                info!(uri = view.uri().as_deref().unwrap_or(""), "page loaded");
            }
            LoadStage::Started | LoadStage::Redirected | LoadStage::Committed => {
                debug!(stage = %stage, "page load progress");
            }
        }
    });
}

fn cache_model(model: CacheModel) -> WebKitCacheModel {
    match model {
        CacheModel::DocumentViewer => WebKitCacheModel::DocumentViewer,
        CacheModel::WebBrowser => WebKitCacheModel::WebBrowser,
        CacheModel::DocumentBrowser => WebKitCacheModel::DocumentBrowser,
    }
}

fn decision_kind(kind: PolicyDecisionType) -> DecisionKind {
    match kind {
        PolicyDecisionType::NewWindowAction => DecisionKind::NewWindow,
        PolicyDecisionType::NavigationAction => DecisionKind::Navigation,
        _ => DecisionKind::Other,
    }
}

fn load_stage(event: LoadEvent) -> Option<LoadStage> {
    match event {
        LoadEvent::Started => Some(LoadStage::Started),
        LoadEvent::Redirected => Some(LoadStage::Redirected),
        LoadEvent::Committed => Some(LoadStage::Committed),
        LoadEvent::Finished => Some(LoadStage::Finished),
        _ => None,
    }
}
