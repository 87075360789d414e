use std::time::Duration;

use leptos::leptos_dom::helpers::{TimeoutHandle, set_timeout_with_handle};
use leptos::prelude::*;
use leptos::task::spawn_local;
use pendaftaran::{Field, JenisKelamin, RegistrationForm, Supabase, SubmitOutcome, submit};

use super::SCHOOL_NAME;

/// How long the success banner stays up before dismissing itself.
const BANNER_LIFETIME: Duration = Duration::from_secs(5);

#[component]
pub fn RegistrationSection() -> impl IntoView {
    let form = RwSignal::new(RegistrationForm::default());
    let store = StoredValue::new_local(Supabase::from_env());

    // The banner timer is cancellable: a new success replaces it, and
    // tearing the section down clears it so the callback never outlives us.
    let banner_timer: StoredValue<Option<TimeoutHandle>, LocalStorage> =
        StoredValue::new_local(None);
    on_cleanup(move || {
        if let Some(handle) = banner_timer.get_value() {
            handle.clear();
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if form.with(|f| f.is_submitting()) {
            return;
        }
        let Some(snapshot) = form.try_update(|f| f.begin_submit()) else {
            return;
        };
        let store = store.get_value();
        spawn_local(async move {
            let outcome = submit(&store, snapshot).await;
            if let SubmitOutcome::Rejected(message) = &outcome {
                web_sys::console::error_1(&format!("pendaftaran: insert gagal: {message}").into());
            }
            let accepted = outcome == SubmitOutcome::Accepted;
            form.update(|f| f.finish_submit(outcome));
            if accepted {
                if let Some(previous) = banner_timer.get_value() {
                    previous.clear();
                }
                if let Ok(handle) = set_timeout_with_handle(
                    move || form.update(|f| f.dismiss_success()),
                    BANNER_LIFETIME,
                ) {
                    banner_timer.set_value(Some(handle));
                }
            }
        });
    };

    let intro = format!(
        "Daftarkan putra/putri Anda untuk menjadi bagian dari keluarga besar {SCHOOL_NAME}"
    );

    view! {
        <section id="daftar" class="registration">
            <div class="container">
                <SuccessBanner form=form />

                <h2 class="section-title">"Formulir Pendaftaran"</h2>
                <p class="section-description">{intro}</p>

                <Show when=move || form.with(|f| f.error_message().is_some())>
                    <div class="error-box">
                        {move || form.with(|f| f.error_message().unwrap_or_default().to_owned())}
                    </div>
                </Show>

                <form class="registration-form" on:submit=on_submit>
                    <div class="form-field">
                        <label class="form-label">"Jenjang Pendidikan *"</label>
                        <select
                            name="jenjang"
                            required
                            prop:value=move || form.with(|f| f.draft.get(Field::Jenjang))
                            on:change=move |ev| {
                                form.update(|f| f.set(Field::Jenjang, &event_target_value(&ev)))
                            }
                        >
                            <option value="">"Pilih Jenjang"</option>
                            <option value="TK">"TK Islam Alhaq"</option>
                            <option value="SD">"SD Islam Alhaq"</option>
                            <option value="SMP">"SMP Islam Alhaq"</option>
                        </select>
                    </div>

                    <fieldset class="form-group">
                        <legend class="form-group-title">"Data Calon Siswa"</legend>

                        <TextField
                            form=form
                            field=Field::NamaSiswa
                            label="Nama Lengkap"
                            name="nama_siswa"
                            placeholder="Masukkan nama lengkap"
                        />

                        <div class="form-row">
                            <TextField
                                form=form
                                field=Field::TempatLahir
                                label="Tempat Lahir"
                                name="tempat_lahir"
                                placeholder="Kota kelahiran"
                            />
                            <TextField
                                form=form
                                field=Field::TanggalLahir
                                label="Tanggal Lahir"
                                name="tanggal_lahir"
                                input_type="date"
                            />
                        </div>

                        <div class="form-field">
                            <label class="form-label">"Jenis Kelamin *"</label>
                            <div class="radio-row">
                                <GenderOption form=form choice=JenisKelamin::LakiLaki required=true />
                                <GenderOption form=form choice=JenisKelamin::Perempuan required=false />
                            </div>
                        </div>
                    </fieldset>

                    <fieldset class="form-group">
                        <legend class="form-group-title">"Data Orang Tua/Wali"</legend>

                        <div class="form-row">
                            <TextField
                                form=form
                                field=Field::NamaAyah
                                label="Nama Ayah"
                                name="nama_ayah"
                                placeholder="Nama lengkap ayah"
                            />
                            <TextField
                                form=form
                                field=Field::NamaIbu
                                label="Nama Ibu"
                                name="nama_ibu"
                                placeholder="Nama lengkap ibu"
                            />
                        </div>

                        <div class="form-field">
                            <label class="form-label">"Alamat Lengkap *"</label>
                            <textarea
                                name="alamat"
                                required
                                rows="3"
                                placeholder="Alamat tempat tinggal"
                                prop:value=move || form.with(|f| f.draft.alamat.clone())
                                on:input=move |ev| {
                                    form.update(|f| f.set(Field::Alamat, &event_target_value(&ev)))
                                }
                            ></textarea>
                        </div>

                        <div class="form-row">
                            <TextField
                                form=form
                                field=Field::NoTelepon
                                label="No. Telepon/WhatsApp"
                                name="no_telepon"
                                input_type="tel"
                                placeholder="08xxxxxxxxxx"
                            />
                            <TextField
                                form=form
                                field=Field::Email
                                label="Email"
                                name="email"
                                input_type="email"
                                placeholder="email@contoh.com"
                                required=false
                            />
                        </div>
                    </fieldset>

                    <button
                        type="submit"
                        class="btn btn-primary btn-submit"
                        prop:disabled=move || form.with(|f| f.is_submitting())
                    >
                        {move || {
                            if form.with(|f| f.is_submitting()) {
                                "Mengirim..."
                            } else {
                                "Daftar Sekarang"
                            }
                        }}
                    </button>
                </form>
            </div>
        </section>
    }
}

#[component]
fn SuccessBanner(form: RwSignal<RegistrationForm>) -> impl IntoView {
    view! {
        <Show when=move || form.with(|f| f.success_shown())>
            <div class="success-banner" role="status">
                "Pendaftaran berhasil! Kami akan menghubungi Anda segera."
            </div>
        </Show>
    }
}

/// One labelled text-ish input bound to a single registration field.
#[component]
fn TextField(
    form: RwSignal<RegistrationForm>,
    field: Field,
    label: &'static str,
    name: &'static str,
    #[prop(default = "text")] input_type: &'static str,
    #[prop(default = "")] placeholder: &'static str,
    #[prop(default = true)] required: bool,
) -> impl IntoView {
    view! {
        <div class="form-field">
            <label class="form-label">{label}{required.then_some(" *")}</label>
            <input
                type=input_type
                name=name
                required=required
                placeholder=placeholder
                prop:value=move || form.with(|f| f.draft.get(field))
                on:input=move |ev| form.update(|f| f.set(field, &event_target_value(&ev)))
            />
        </div>
    }
}

#[component]
fn GenderOption(
    form: RwSignal<RegistrationForm>,
    choice: JenisKelamin,
    required: bool,
) -> impl IntoView {
    view! {
        <label class="radio-option">
            <input
                type="radio"
                name="jenis_kelamin"
                value=choice.as_str()
                required=required
                prop:checked=move || form.with(|f| f.draft.jenis_kelamin == Some(choice))
                on:change=move |ev| {
                    form.update(|f| f.set(Field::JenisKelamin, &event_target_value(&ev)))
                }
            />
            <span>{choice.as_str()}</span>
        </label>
    }
}
