//! Host-page class strings, control ids, icons, and tooltip copy.
//!
//! The class lists mirror the host page's own design system so injected
//! controls are indistinguishable from native ones. Structural selectors
//! live in `Settings`; what is here is presentation only.

pub const PROMPT_LIST_BUTTON_ID: &str = "prompt-list-button";
pub const SECTION_TOGGLE_BUTTON_ID: &str = "section-toggle-button";
pub const DROPDOWN_ID: &str = "prompt-list-dropdown";
pub const TOGGLE_TOOLTIP_WRAPPER_ID: &str = "section-toggle-tooltip-wrapper";

pub const DROPDOWN_CLASSES: &str = "z-50 rounded-2xl bg-surface-l4 border border-border-l1 text-primary backdrop-blur-md p-1 shadow-sm shadow-black/5 max-h-[80vh] overflow-auto max-w-[calc(100vw-32px)] space-y-0.5";

pub const DROPDOWN_ITEM_CLASSES: &str = "relative flex select-none items-center cursor-pointer px-3 py-2 rounded-xl text-sm outline-none hover:bg-button-ghost-hover";

pub const BUTTON_COMMON_CLASSES: &[&str] = &[
    "border",
    "border-transparent",
    "p-0",
    "rounded-full",
    "text-sm",
    "flex",
    "flex-row",
    "items-center",
    "justify-center",
    "gap-1",
    "hover:bg-button-ghost-hover",
];

pub const TOOLTIP_CLASSES: &str = "z-50 overflow-hidden rounded-md bg-popover shadow-sm dark:shadow-none px-3 py-1.5 text-xs text-popover-foreground pointer-events-none max-w-80 text-wrap animate-in fade-in-0 zoom-in-95 data-[state=closed]:animate-out data-[state=closed]:fade-out-0 data-[state=closed]:zoom-out-95 data-[side=bottom]:slide-in-from-top-2 data-[side=left]:slide-in-from-right-2 data-[side=right]:slide-in-from-left-2 data-[side=top]:slide-in-from-bottom-2";

pub const PROMPT_LIST_TOOLTIP: &str = "View your prompts";
pub const COLLAPSE_TOOLTIP: &str = "Collapse code block";
pub const EXPAND_TOOLTIP: &str = "Expand code block";
pub const ANSWER_TOOLTIP: &str = "Jump to answer";

pub const PROMPT_LIST_ICON_SVG: &str = r#"
    <svg width="18" height="18" viewBox="0 0 24 24" fill="none" xmlns="http://www.w3.org/2000/svg" class="stroke-[2]" stroke-width="2">
      <path d="M21.5 13v4.2c0 1.68-1.26 3.255-2.94 3.57a4.83 4.83 90 01-.945.105h-10.5a3.78 3.78 90 01-3.78-3.57V6.825c0-1.68 1.365-3.255 3.045-3.57a5.46 5.46 90 01.84-.105h10.395a3.78 3.78 90 013.78 3.675zM12.984 6.008C8.411 6.818 5.443 10.887 8.967 12.959M14.952 12.062C19.648 14.156 15.988 17.817 11.168 18.122M12.003 15.379V14.783M12.005 12.453V11.716M11.959 9.322V8.793" stroke="currentColor" stroke-linecap="round"/>
    </svg>
"#;

pub const COLLAPSE_ICON_SVG: &str = r#"
    <svg xmlns="http://www.w3.org/2000/svg" width="18" height="18" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">
      <path d="M3 5h8"/>
      <path d="M3 12h8"/>
      <path d="M3 19h8"/>
      <path d="m15 5 3 3 3-3"/>
      <path d="m15 19 3-3 3 3"/>
    </svg>
"#;

// Collapse chevrons mirrored outward
pub const EXPAND_ICON_SVG: &str = r#"
    <svg xmlns="http://www.w3.org/2000/svg" width="18" height="18" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">
      <path d="M3 5h8"/>
      <path d="M3 12h8"/>
      <path d="M3 19h8"/>
      <path d="m15 8 3-3 3 3"/>
      <path d="m15 16 3 3 3-3"/>
    </svg>
"#;

pub const ANSWER_ICON_SVG: &str = r#"
    <svg xmlns="http://www.w3.org/2000/svg" width="24" height="24" viewBox="0 0 24 24" fill="currentColor" stroke="currentColor" stroke-width="0" stroke-linecap="square" stroke-linejoin="square">
  		<path d="m9.7459 15.7641h-.9979l.0499-1.4719-.0249-.1497v-1.9709l0-.3493q0-.7484-.3742-1.0977-.3742-.3493-1.1975-.3493-.6486 0-1.1975.1996-.5489.1996-.973.4491l.0998-.8482q.2245-.1497.5738-.2744.3243-.1497.7484-.2245.4241-.0998.9231-.0998.6486 0 1.1227.1497.4491.1497.7484.4491.2744.2994.4241.7235.1247.4241.1247.948v3.9418m-3.1434.0998q-.8981 0-1.3971-.4491-.474-.4241-.474-1.2474v-.1746q0-.8482.5239-1.2474.5239-.4241 1.6466-.5738l1.921-.2744.0499.7484-1.8462.2744q-.6985.0998-.9979.3493-.2994.2495-.2994.6985v.0998q0 .474.2994.7484.2994.2495.8981.2495.5239 0 .8981-.1746.3742-.1746.5988-.474.2245-.2994.3243-.6736l.1497.6985h-.1996q-.0748.3992-.3243.7484-.2495.3493-.6736.5489-.4241.1996-1.0977.1996zm9.7297-.1247h-.9979v-3.7921q0-.499-.1247-.8482-.1247-.3493-.4491-.5489-.2994-.1996-.8233-.1996-.474 0-.8233.1746-.3493.1746-.5738.499-.2245.2994-.2994.6985l-.1746-.7235h.2245q.0998-.4241.3493-.7484t.6736-.5489q.4241-.1996 1.0229-.1996.7235 0 1.1726.2744.4491.2744.6486.7983.1996.5239.1996 1.2723v3.8919m-4.0665 0h-1.0478v-6.0873h1.0229l-.0499 1.4719.0499.0499v4.5655zm7.5343.1247q-.7235 0-1.2723-.1497-.5489-.1497-.8981-.3493l-.0998-.948q.4491.2495.9979.3992.5489.1746 1.2474.1746.6985 0 1.0728-.2245.3493-.2245.3493-.6736v-.0748q0-.2744-.1247-.474-.1247-.1996-.474-.3243-.3493-.1497-.9979-.2744-.7734-.1746-1.2225-.3992-.4491-.2245-.6237-.5738-.1996-.3243-.1996-.8233v-.0249q0-.7983.5489-1.1975.5489-.4241 1.6715-.4241.7235 0 1.2474.1746.5239.1497.8732.3493l.0998.8482q-.3992-.2495-.9231-.3992-.5239-.1497-1.1726-.1497-.474 0-.7734.0998-.2994.0998-.4241.2744-.1247.1746-.1247.4241v.0499q0 .2744.1247.474.1247.1996.474.3243.3493.1497.948.2744.7734.1497 1.2474.3742.4491.2245.6486.5489.1996.3243.1996.8482v.0998q0 .8482-.5988 1.2973-.5988.4491-1.7713.4491zm4.0665-.0249q-.3243 0-.474-.1746-.1497-.1746-.1497-.499v-.0748q0-.3243.1497-.499.1497-.1746.474-.1746.3243 0 .474.1746.1497.1746.1497.499v.0748q0 .3243-.1497.499-.1497.1746-.474.1746z"/>
	</svg>
"#;

/// Icon + tooltip copy pair for a toggle state.
pub fn toggle_appearance(state: promptlist_core::ToggleState) -> (&'static str, &'static str) {
    match state {
        promptlist_core::ToggleState::Collapse => (COLLAPSE_ICON_SVG, COLLAPSE_TOOLTIP),
        promptlist_core::ToggleState::Expand => (EXPAND_ICON_SVG, EXPAND_TOOLTIP),
    }
}
