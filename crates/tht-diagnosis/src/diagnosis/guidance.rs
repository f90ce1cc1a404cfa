use serde::Serialize;

/// Advisory notice attached to every diagnosis.
pub const DISCLAIMER: &str =
    "PERHATIAN: Ini adalah sistem diagnosis otomatis. Selalu konsultasikan dengan profesional medis.";

const DESCRIPTIONS: [(&str, &str); 6] = [
    (
        "Otitis Media Serosa",
        "Kondisi cairan di telinga tengah yang dapat memengaruhi pendengaran.",
    ),
    (
        "Polip Hidung",
        "Pertumbuhan berlebih di lapisan mukosa hidung yang dapat menghambat pernafasan.",
    ),
    (
        "Faringitis Akut",
        "Peradangan pada tenggorokan yang biasanya disebabkan oleh infeksi virus.",
    ),
    (
        "Infeksi Leher Dalam",
        "Infeksi serius pada struktur leher yang memerlukan perhatian medis.",
    ),
    (
        "Abses Retrofaring",
        "Kantong nanah di belakang tenggorokan yang dapat menyebabkan kesulitan menelan.",
    ),
    (
        "Karsinoma Nafosaring",
        "Kanker pada bagian atas tenggorokan yang memerlukan pemeriksaan mendalam.",
    ),
];

const RECOMMENDATIONS: [(&str, &[&str]); 6] = [
    (
        "Otitis Media Serosa",
        &[
            "Konsultasi dengan dokter THT",
            "Cek pendengaran secara berkala",
            "Hindari paparan suara keras",
        ],
    ),
    (
        "Polip Hidung",
        &[
            "Lakukan tes alergi",
            "Konsultasi bedah THT",
            "Pertimbangkan pembedahan",
        ],
    ),
    (
        "Faringitis Akut",
        &[
            "Istirahat yang cukup",
            "Minum air putih banyak",
            "Konsumsi obat pereda nyeri",
        ],
    ),
    (
        "Infeksi Leher Dalam",
        &[
            "Segera konsultasi dokter",
            "Terapi antibiotik",
            "Istirahat total",
        ],
    ),
    (
        "Abses Retrofaring",
        &[
            "Segera ke rumah sakit",
            "Terapi antibiotik",
            "Rawat inap mungkin diperlukan",
        ],
    ),
    (
        "Karsinoma Nafosaring",
        &[
            "Pemeriksaan onkologi menyeluruh",
            "CT Scan dan pemeriksaan lanjutan",
            "Konsultasi ahli kanker",
        ],
    ),
];

/// One-sentence description of a disease, if it is known.
pub fn describe(disease: &str) -> Option<&'static str> {
    DESCRIPTIONS
        .iter()
        .find(|(name, _)| *name == disease)
        .map(|(_, description)| *description)
}

/// Ordered follow-up actions for a disease; empty for unknown names.
pub fn recommendations(disease: &str) -> &'static [&'static str] {
    RECOMMENDATIONS
        .iter()
        .find(|(name, _)| *name == disease)
        .map(|(_, actions)| *actions)
        .unwrap_or(&[])
}

/// Static copy for the application's about page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AboutContent {
    pub title: &'static str,
    pub welcome: &'static str,
    pub purpose: &'static str,
    pub methodology: &'static str,
    pub limitations: &'static [&'static str],
    pub developer_note: &'static str,
}

pub fn about() -> AboutContent {
    AboutContent {
        title: "Sistem Pakar Diagnosis Penyakit THT",
        welcome: "Selamat datang di sistem pakar untuk mendiagnosis penyakit THT.",
        purpose: "Aplikasi ini dikembangkan untuk membantu mendiagnosis penyakit THT berdasarkan gejala yang dialami.",
        methodology: "Aplikasi menggunakan algoritma Naive Bayes untuk menghitung probabilitas penyakit berdasarkan gejala yang dipilih.",
        limitations: &[
            "Sistem ini tidak menggantikan diagnosis profesional medis",
            "Akurasi bergantung pada data pelatihan yang terbatas",
            "Selalu konsultasikan dengan dokter ahli",
        ],
        developer_note: "Sistem pakar ini dikembangkan untuk membantu masyarakat mendapatkan informasi awal tentang potensi penyakit THT.",
    }
}
