//! The Registration Submission row as the remote `pendaftaran` table expects it.
//!
//! Column names and the enum value strings are fixed by the hosted table;
//! everything serializes to exactly those keys.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum JenisKelamin {
    #[serde(rename = "Laki-laki")]
    LakiLaki,
    Perempuan,
}

impl JenisKelamin {
    pub fn as_str(self) -> &'static str {
        match self {
            JenisKelamin::LakiLaki => "Laki-laki",
            JenisKelamin::Perempuan => "Perempuan",
        }
    }

    /// Parses the form control value; anything unrecognized clears the choice.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "Laki-laki" => Some(JenisKelamin::LakiLaki),
            "Perempuan" => Some(JenisKelamin::Perempuan),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Jenjang {
    TK,
    SD,
    SMP,
}

impl Jenjang {
    pub fn as_str(self) -> &'static str {
        match self {
            Jenjang::TK => "TK",
            Jenjang::SD => "SD",
            Jenjang::SMP => "SMP",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "TK" => Some(Jenjang::TK),
            "SD" => Some(Jenjang::SD),
            "SMP" => Some(Jenjang::SMP),
            _ => None,
        }
    }
}

/// One row of the remote `pendaftaran` table.
///
/// Starts empty on page load and is sent as an immutable snapshot on submit.
/// No validation happens here; `required` on the form controls is the only
/// gate, and the remote service owns every constraint beyond that.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Registration {
    pub nama_siswa: String,
    pub tempat_lahir: String,
    /// ISO date string straight from `<input type="date">`.
    pub tanggal_lahir: String,
    pub jenis_kelamin: Option<JenisKelamin>,
    pub nama_ayah: String,
    pub nama_ibu: String,
    pub alamat: String,
    pub no_telepon: String,
    pub email: String,
    pub jenjang: Option<Jenjang>,
}

/// Names the ten form fields for the controller's single mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    NamaSiswa,
    TempatLahir,
    TanggalLahir,
    JenisKelamin,
    NamaAyah,
    NamaIbu,
    Alamat,
    NoTelepon,
    Email,
    Jenjang,
}

impl Registration {
    /// Sets one field from its form control value, unconstrained.
    pub fn set(&mut self, field: Field, value: &str) {
        match field {
            Field::NamaSiswa => self.nama_siswa = value.to_owned(),
            Field::TempatLahir => self.tempat_lahir = value.to_owned(),
            Field::TanggalLahir => self.tanggal_lahir = value.to_owned(),
            Field::JenisKelamin => self.jenis_kelamin = JenisKelamin::parse(value),
            Field::NamaAyah => self.nama_ayah = value.to_owned(),
            Field::NamaIbu => self.nama_ibu = value.to_owned(),
            Field::Alamat => self.alamat = value.to_owned(),
            Field::NoTelepon => self.no_telepon = value.to_owned(),
            Field::Email => self.email = value.to_owned(),
            Field::Jenjang => self.jenjang = Jenjang::parse(value),
        }
    }

    /// The display value of one field, as the bound form control shows it.
    pub fn get(&self, field: Field) -> String {
        match field {
            Field::NamaSiswa => self.nama_siswa.clone(),
            Field::TempatLahir => self.tempat_lahir.clone(),
            Field::TanggalLahir => self.tanggal_lahir.clone(),
            Field::JenisKelamin => self
                .jenis_kelamin
                .map(JenisKelamin::as_str)
                .unwrap_or_default()
                .to_owned(),
            Field::NamaAyah => self.nama_ayah.clone(),
            Field::NamaIbu => self.nama_ibu.clone(),
            Field::Alamat => self.alamat.clone(),
            Field::NoTelepon => self.no_telepon.clone(),
            Field::Email => self.email.clone(),
            Field::Jenjang => self
                .jenjang
                .map(Jenjang::as_str)
                .unwrap_or_default()
                .to_owned(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn last_set_value_wins() {
        let mut row = Registration::default();
        row.set(Field::NamaSiswa, "Ahmad");
        row.set(Field::NamaSiswa, "Ahmad Fauzi");
        row.set(Field::NoTelepon, "0812");
        row.set(Field::NoTelepon, "081234567890");
        assert_eq!(row.get(Field::NamaSiswa), "Ahmad Fauzi");
        assert_eq!(row.get(Field::NoTelepon), "081234567890");
        assert_eq!(row.get(Field::TempatLahir), "");
    }

    #[test]
    fn enum_fields_parse_from_control_values() {
        let mut row = Registration::default();
        row.set(Field::JenisKelamin, "Laki-laki");
        row.set(Field::Jenjang, "SD");
        assert_eq!(row.jenis_kelamin, Some(JenisKelamin::LakiLaki));
        assert_eq!(row.jenjang, Some(Jenjang::SD));
        assert_eq!(row.get(Field::JenisKelamin), "Laki-laki");
        assert_eq!(row.get(Field::Jenjang), "SD");

        // The placeholder option value clears the selection again.
        row.set(Field::Jenjang, "");
        assert_eq!(row.jenjang, None);
        assert_eq!(row.get(Field::Jenjang), "");
    }

    #[test]
    fn serializes_to_the_fixed_column_names() {
        let mut row = Registration::default();
        row.set(Field::NamaSiswa, "Siti");
        row.set(Field::JenisKelamin, "Perempuan");
        row.set(Field::Jenjang, "TK");

        let json = serde_json::to_value(&row).unwrap();
        assert_eq!(json["nama_siswa"], "Siti");
        assert_eq!(json["jenis_kelamin"], "Perempuan");
        assert_eq!(json["jenjang"], "TK");
        assert_eq!(json["email"], "");
        assert!(json["tanggal_lahir"].is_string());
    }
}
