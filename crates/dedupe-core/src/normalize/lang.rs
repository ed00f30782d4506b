/// Language and language-region codes recognised as locale path segments.
///
/// Two-letter codes that collide with common path words (`id`, `is`, `no`,
/// `me`, `hi`, ...) are left out.
pub const BUILTIN_LANGUAGE_CODES: &[&str] = &[
    "ar", "bg", "bn", "ca", "cs", "cy", "da", "de", "el", "en", "es", "et", "eu", "fa", "fi",
    "fil", "fr", "ga", "gl", "gu", "hr", "hu", "hy", "it", "ja", "ka", "kk", "km", "kn", "ko",
    "lt", "lv", "mk", "ml", "mn", "mr", "ms", "nb", "nl", "nn", "pl", "pt", "ro", "ru", "sk",
    "sl", "sq", "sr", "sv", "sw", "ta", "te", "th", "tr", "uk", "ur", "uz", "vi", "zh",
    "ar-ae", "ar-sa", "de-at", "de-ch", "de-de", "en-au", "en-ca", "en-gb", "en-ie", "en-in",
    "en-nz", "en-sg", "en-us", "en-za", "es-419", "es-ar", "es-cl", "es-co", "es-es", "es-mx",
    "es-us", "fr-be", "fr-ca", "fr-ch", "fr-fr", "it-ch", "it-it", "ja-jp", "ko-kr", "nl-be",
    "nl-nl", "pl-pl", "pt-br", "pt-pt", "ru-ru", "sv-se", "tr-tr", "zh-cn", "zh-hans",
    "zh-hant", "zh-hk", "zh-tw",
];
