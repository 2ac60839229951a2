//! Builtin source table: which exports to convert and how.
//!
//! Each entry binds one CSV export in the input directory to an output
//! category and to the column names that carry the template's display name
//! and prompt text. The table is fixed; file and column names are matched
//! byte-for-byte as the export tool wrote them, including the mangled
//! emoji prefixes. They look broken but they are the real names on disk,
//! so they must not be "repaired" here.

/// Column mapping and output category for one CSV export.
#[derive(Debug, Clone, Copy)]
pub struct SourceConfig {
    /// Expected file name inside the input directory.
    pub filename: &'static str,
    /// Output subdirectory for this source's templates.
    pub category: &'static str,
    /// Column holding the template's display name.
    pub name_column: &'static str,
    /// Column holding the primary prompt text.
    pub prompt_column: &'static str,
    /// Pre-composed prompt column, preferred over `prompt_column` when a
    /// row has it non-empty.
    pub packaged_column: Option<&'static str>,
}

/// The fixed set of known exports, one per content category.
pub const SOURCES: &[SourceConfig] = &[
    SourceConfig {
        filename: "ðŸ“ƒ  writingBrandVoice-Grid view.csv",
        category: "brand-voice",
        name_column: "Brand Voice",
        prompt_column: "Description",
        packaged_column: Some("âœï¸ Blogpost"),
    },
    SourceConfig {
        filename: "ðŸ“ƒ blogpostTemplatePrompts-Grid view.csv",
        category: "blogpost",
        name_column: "blogpostTemplateName",
        prompt_column: "blogpostPromptTemplate",
        packaged_column: Some("packagedPromptTemplateIdeas"),
    },
    SourceConfig {
        filename: "ðŸ“ƒ ideasTemplatePrompts-Grid view.csv",
        category: "ideas",
        name_column: "ideasTemplateName",
        prompt_column: "ideasPromptTemplate",
        packaged_column: Some("packagedPromptTemplateIdeas"),
    },
    SourceConfig {
        filename: "ðŸ“ƒ promoEmailPromptTemplates-Grid view.csv",
        category: "email",
        name_column: "emailPromptName",
        prompt_column: "emailTemplatePromptText",
        packaged_column: Some("packagedTemplatePromptText"),
    },
    SourceConfig {
        filename: "ðŸ“ƒ socialPostTemplates-Grid view.csv",
        category: "social",
        name_column: "SocialPromptName",
        prompt_column: "templatePromptText",
        packaged_column: Some("packagedTemplatePromptTextForAI"),
    },
    SourceConfig {
        filename: "ðŸ“ƒ videoReelsHooksTemplates-Grid view.csv",
        category: "video",
        name_column: "reelsVideoHookPromptName",
        prompt_column: "templateVideoHookPromptText",
        packaged_column: Some("packagedTemplatePromptTextForAI"),
    },
];
