use std::fmt;
use std::str::FromStr;

/// UI language. Arabic flips the document to right-to-left.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Language {
    #[default]
    En,
    Ar,
}

impl Language {
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Ar => "ar",
        }
    }

    pub fn dir(&self) -> &'static str {
        match self {
            Language::Ar => "rtl",
            Language::En => "ltr",
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            Language::En => Language::Ar,
            Language::Ar => Language::En,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// `FromStr` + `Display` are what `FromToStringCodec` needs to persist the
// preference in localStorage.
impl FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "en" => Ok(Language::En),
            "ar" => Ok(Language::Ar),
            other => Err(format!("unknown language: {other}")),
        }
    }
}

/// Resolve `key` for `lang`, falling back to English, then to the key itself.
/// Never fails; unknown keys come back verbatim.
pub fn t(key: &str, lang: Language) -> String {
    lookup(table(lang), key)
        .or_else(|| lookup(EN, key))
        .unwrap_or(key)
        .to_string()
}

/// Compound lookup key for an industry-confidence value: the value is
/// capitalized and appended to the fixed `confidence` prefix
/// (`high` -> `confidenceHigh`).
pub fn confidence_key(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => format!("confidence{}{}", first.to_uppercase(), chars.as_str()),
        None => "confidence".to_string(),
    }
}

fn table(lang: Language) -> &'static [(&'static str, &'static str)] {
    match lang {
        Language::En => EN,
        Language::Ar => AR,
    }
}

fn lookup(table: &'static [(&'static str, &'static str)], key: &str) -> Option<&'static str> {
    table.iter().find(|(k, _)| *k == key).map(|(_, v)| *v)
}

const EN: &[(&str, &str)] = &[
    // Header
    ("appTitle", "ZOHO Sales Expert & Pitch Generator"),
    ("languageToggle", "العربية"),
    // Input form
    ("inputSectionTitle", "Company Research"),
    ("websiteLabel", "Company Website URL"),
    ("websitePlaceholder", "https://example.com"),
    ("facebookLabel", "Facebook Profile/Page"),
    ("facebookPlaceholder", "CompanyName or profile URL"),
    ("instagramLabel", "Instagram Profile"),
    ("instagramPlaceholder", "@companyname"),
    ("linkedinLabel", "LinkedIn Company/Profile"),
    ("linkedinPlaceholder", "Company name or profile URL"),
    ("descriptionLabel", "Manual Company Description (optional)"),
    (
        "descriptionPlaceholder",
        "Provide company details if URLs are not available...",
    ),
    ("generateButton", "Generate Pitch"),
    ("clearButton", "Clear All"),
    (
        "validationError",
        "Please provide at least one input (URL or description)",
    ),
    // Loading
    (
        "loadingMessage",
        "Analyzing company data and generating customized pitch...",
    ),
    ("loadingSubtext", "This may take 10-15 seconds"),
    // Output sections
    ("resultsGenerated", "Your Customized Pitch"),
    ("partATitle", "Industry Confirmation & Pain Points"),
    ("partBTitle", "Automation Opportunities"),
    ("partCTitle", "Customized Zoho Solutions"),
    ("partDTitle", "Quick Proposal"),
    // Part A
    ("detectedIndustry", "Detected Industry"),
    ("confidenceHigh", "High Confidence"),
    ("confidenceMedium", "Medium Confidence"),
    ("confidenceLow", "Low Confidence"),
    ("painPointsTitle", "Key Pain Points"),
    // Part B
    ("productivityGain", "Productivity Gain"),
    ("costSavings", "Cost Savings"),
    // Part C
    ("expandDetails", "Expand Details"),
    ("collapseDetails", "Collapse"),
    ("zohoApps", "Zoho Apps Involved"),
    ("implementation", "Implementation Steps"),
    // Part D
    (
        "proposalClosing",
        "This is a quick generic system creation based on general search. More specific and detailed solutions can be discussed with our expertise.",
    ),
    ("downloadPDF", "Download PDF"),
    ("shareEmail", "Share via Email"),
    ("shareWhatsApp", "Share on WhatsApp"),
    ("copyToClipboard", "Copy to Clipboard"),
    ("copied", "Copied!"),
    // Additional features
    ("salesTipTitle", "Sales Tip & Opening Angle"),
    ("deepDiveTitle", "Deep Dive Battle Cards"),
    ("researchSummaryTitle", "Company Research Summary"),
    ("presentationModeButton", "Presentation Mode"),
    // Presentation mode
    ("presentationSlide1", "Company Overview"),
    ("presentationSlide2", "Challenges & Pain Points"),
    ("presentationSlide3", "Zoho Solutions"),
    ("presentationSlide4", "The Power of Zoho One"),
    ("closePresentation", "Close Presentation"),
    ("nextSlide", "Next"),
    ("previousSlide", "Previous"),
    // Feature suggestion
    ("featureSuggestionTitle", "💡 Suggest a Feature"),
    (
        "featurePlaceholder",
        "Have an idea to make this app better? Share your enhancement suggestions here...",
    ),
    ("submitIdea", "Submit Idea"),
    (
        "featureSuccess",
        "✅ Thank you! Your idea has been submitted for review.",
    ),
    ("featureError", "Failed to submit suggestion. Please try again."),
    (
        "privacyNote",
        "Your suggestions help us improve. No personal data is collected.",
    ),
    // Error messages
    ("errorTitle", "Oops! Something went wrong"),
    ("errorRetry", "Retry"),
    (
        "errorFallback",
        "Failed to generate pitch. Please check your inputs and try again.",
    ),
    (
        "networkError",
        "Network error. Please check your connection and try again.",
    ),
    // Deep dive
    ("benefit", "Benefit"),
    ("feature", "Feature"),
    ("howToBuild", "How to Build This"),
    // General
    ("close", "Close"),
    ("save", "Save"),
    ("cancel", "Cancel"),
    ("loading", "Loading..."),
    ("noData", "No data available"),
];

const AR: &[(&str, &str)] = &[
    // Header
    ("appTitle", "خبير مبيعات ZOHO ومولد العروض"),
    ("languageToggle", "English"),
    // Input form
    ("inputSectionTitle", "بحث الشركة"),
    ("websiteLabel", "رابط موقع الشركة"),
    ("websitePlaceholder", "https://example.com"),
    ("facebookLabel", "صفحة/حساب فيسبوك"),
    ("facebookPlaceholder", "اسم الشركة أو رابط الصفحة"),
    ("instagramLabel", "حساب إنستغرام"),
    ("instagramPlaceholder", "@اسم_الشركة"),
    ("linkedinLabel", "حساب/صفحة لينكد إن"),
    ("linkedinPlaceholder", "اسم الشركة أو رابط الحساب"),
    ("descriptionLabel", "وصف يدوي للشركة (اختياري)"),
    (
        "descriptionPlaceholder",
        "قدم تفاصيل الشركة إذا لم تكن الروابط متاحة...",
    ),
    ("generateButton", "إنشاء العرض"),
    ("clearButton", "مسح الكل"),
    (
        "validationError",
        "يرجى تقديم مدخل واحد على الأقل (رابط أو وصف)",
    ),
    // Loading
    (
        "loadingMessage",
        "جاري تحليل بيانات الشركة وإنشاء عرض مخصص...",
    ),
    ("loadingSubtext", "قد يستغرق هذا 10-15 ثانية"),
    // Output sections
    ("resultsGenerated", "عرضك المخصص"),
    ("partATitle", "تأكيد الصناعة ونقاط الألم"),
    ("partBTitle", "فرص الأتمتة"),
    ("partCTitle", "حلول Zoho المخصصة"),
    ("partDTitle", "عرض سريع"),
    // Part A
    ("detectedIndustry", "الصناعة المكتشفة"),
    ("confidenceHigh", "ثقة عالية"),
    ("confidenceMedium", "ثقة متوسطة"),
    ("confidenceLow", "ثقة منخفضة"),
    ("painPointsTitle", "نقاط الألم الرئيسية"),
    // Part B
    ("productivityGain", "زيادة الإنتاجية"),
    ("costSavings", "توفير التكاليف"),
    // Part C
    ("expandDetails", "توسيع التفاصيل"),
    ("collapseDetails", "طي"),
    ("zohoApps", "تطبيقات Zoho المستخدمة"),
    ("implementation", "خطوات التنفيذ"),
    // Part D
    (
        "proposalClosing",
        "هذا إنشاء نظام عام سريع بناءً على البحث العام. يمكن مناقشة حلول أكثر تحديدًا وتفصيلاً مع خبرائنا.",
    ),
    ("downloadPDF", "تحميل PDF"),
    ("shareEmail", "مشاركة عبر البريد الإلكتروني"),
    ("shareWhatsApp", "مشاركة على واتساب"),
    ("copyToClipboard", "نسخ إلى الحافظة"),
    ("copied", "تم النسخ!"),
    // Additional features
    ("salesTipTitle", "نصيحة مبيعات وزاوية افتتاحية"),
    ("deepDiveTitle", "بطاقات معركة التعمق"),
    ("researchSummaryTitle", "ملخص بحث الشركة"),
    ("presentationModeButton", "وضع العرض التقديمي"),
    // Presentation mode
    ("presentationSlide1", "نظرة عامة على الشركة"),
    ("presentationSlide2", "التحديات ونقاط الألم"),
    ("presentationSlide3", "حلول Zoho"),
    ("presentationSlide4", "قوة Zoho One"),
    ("closePresentation", "إغلاق العرض التقديمي"),
    ("nextSlide", "التالي"),
    ("previousSlide", "السابق"),
    // Feature suggestion
    ("featureSuggestionTitle", "💡 اقترح ميزة"),
    (
        "featurePlaceholder",
        "هل لديك فكرة لجعل هذا التطبيق أفضل؟ شارك مقترحات التحسين هنا...",
    ),
    ("submitIdea", "إرسال الفكرة"),
    ("featureSuccess", "✅ شكراً لك! تم إرسال فكرتك للمراجعة."),
    ("featureError", "فشل إرسال الاقتراح. يرجى المحاولة مرة أخرى."),
    (
        "privacyNote",
        "اقتراحاتك تساعدنا على التحسين. لا يتم جمع أي بيانات شخصية.",
    ),
    // Error messages
    ("errorTitle", "عذراً! حدث خطأ ما"),
    ("errorRetry", "إعادة المحاولة"),
    (
        "errorFallback",
        "فشل إنشاء العرض. يرجى التحقق من المدخلات والمحاولة مرة أخرى.",
    ),
    (
        "networkError",
        "خطأ في الشبكة. يرجى التحقق من الاتصال والمحاولة مرة أخرى.",
    ),
    // Deep dive
    ("benefit", "الفائدة"),
    ("feature", "الميزة"),
    ("howToBuild", "كيفية البناء"),
    // General
    ("close", "إغلاق"),
    ("save", "حفظ"),
    ("cancel", "إلغاء"),
    ("loading", "جاري التحميل..."),
    ("noData", "لا توجد بيانات متاحة"),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_in_requested_language() {
        assert_eq!(t("generateButton", Language::En), "Generate Pitch");
        assert_eq!(t("generateButton", Language::Ar), "إنشاء العرض");
    }

    #[test]
    fn falls_back_to_english_then_to_key() {
        // The fallback chain: requested table, English table, key verbatim.
        const PARTIAL: &[(&str, &str)] = &[("onlyHere", "value")];
        assert_eq!(lookup(PARTIAL, "generateButton"), None);
        assert_eq!(
            lookup(PARTIAL, "generateButton").or_else(|| lookup(EN, "generateButton")),
            Some("Generate Pitch")
        );
        assert_eq!(t("definitelyNotAKey", Language::Ar), "definitelyNotAKey");
        assert_eq!(t("definitelyNotAKey", Language::En), "definitelyNotAKey");
    }

    #[test]
    fn resolution_is_idempotent() {
        let first = t("loadingMessage", Language::Ar);
        let second = t("loadingMessage", Language::Ar);
        assert_eq!(first, second);
    }

    #[test]
    fn every_english_key_has_an_arabic_counterpart() {
        for (key, _) in EN {
            assert!(
                lookup(AR, key).is_some(),
                "missing Arabic translation for {key}"
            );
        }
    }

    #[test]
    fn confidence_keys_are_capitalized_compounds() {
        assert_eq!(confidence_key("high"), "confidenceHigh");
        assert_eq!(confidence_key("medium"), "confidenceMedium");
        assert_eq!(confidence_key(""), "confidence");
        // Unknown values still form a key; `t` then returns it verbatim.
        assert_eq!(t(&confidence_key("unknown"), Language::En), "confidenceUnknown");
    }

    #[test]
    fn language_roundtrips_through_storage_codec_traits() {
        assert_eq!("en".parse::<Language>(), Ok(Language::En));
        assert_eq!("ar".parse::<Language>(), Ok(Language::Ar));
        assert!("de".parse::<Language>().is_err());
        assert_eq!(Language::Ar.to_string(), "ar");
        assert_eq!(Language::En.toggled(), Language::Ar);
        assert_eq!(Language::Ar.dir(), "rtl");
        assert_eq!(Language::En.dir(), "ltr");
    }
}
