use serde::{Deserialize, Deserializer, Serialize};

/// Listing record returned by the list and search endpoints.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct MovieSummary {
    pub id: i64,
    pub title: String,
    #[serde(default, deserialize_with = "nullable")]
    pub overview: String,
    #[serde(default)]
    pub poster_path: Option<String>,
    #[serde(default)]
    pub backdrop_path: Option<String>,
    #[serde(default, deserialize_with = "nullable")]
    pub release_date: String,
    #[serde(default, deserialize_with = "nullable")]
    pub vote_average: f64,
    #[serde(default, deserialize_with = "nullable")]
    pub vote_count: u64,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct MovieDetail {
    #[serde(flatten)]
    pub summary: MovieSummary,
    #[serde(default, deserialize_with = "nullable")]
    pub budget: i64,
    #[serde(default, deserialize_with = "nullable")]
    pub genres: Vec<Genre>,
    #[serde(default, deserialize_with = "nullable")]
    pub homepage: String,
    #[serde(default, deserialize_with = "nullable")]
    pub original_language: String,
    #[serde(default, deserialize_with = "nullable")]
    pub original_title: String,
    #[serde(default, deserialize_with = "nullable")]
    pub popularity: f64,
    #[serde(default, deserialize_with = "nullable")]
    pub production_companies: Vec<ProductionCompany>,
    #[serde(default, deserialize_with = "nullable")]
    pub production_countries: Vec<ProductionCountry>,
    #[serde(default, deserialize_with = "nullable")]
    pub revenue: i64,
    #[serde(default, deserialize_with = "nullable")]
    pub runtime: u32,
    #[serde(default, deserialize_with = "nullable")]
    pub spoken_languages: Vec<SpokenLanguage>,
    #[serde(default, deserialize_with = "nullable")]
    pub status: String,
    #[serde(default, deserialize_with = "nullable")]
    pub tagline: String,
}

impl MovieDetail {
    pub fn id(&self) -> i64 {
        self.summary.id
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Genre {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ProductionCompany {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub logo_path: Option<String>,
    #[serde(default, deserialize_with = "nullable")]
    pub origin_country: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ProductionCountry {
    pub iso_3166_1: String,
    pub name: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct SpokenLanguage {
    #[serde(default, deserialize_with = "nullable")]
    pub english_name: String,
    pub iso_639_1: String,
    #[serde(default, deserialize_with = "nullable")]
    pub name: String,
}

/// Envelope of every list endpoint. Only `results` is guaranteed.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
pub struct MovieList {
    #[serde(default)]
    pub page: Option<u32>,
    pub results: Vec<MovieSummary>,
    #[serde(default)]
    pub total_pages: Option<u32>,
    #[serde(default)]
    pub total_results: Option<u32>,
}

// TMDB sends `null` for fields that are usually present; treat it like absence.
fn nullable<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
