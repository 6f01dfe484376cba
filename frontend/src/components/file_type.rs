//! File type radios and the example panels they toggle.

use leptos::*;

use crate::UploadKind;

const PATIENT_EXAMPLE: &str = "\
firstName,lastName,dateOfBirth,gender,email,phoneNumber,bloodType,allergies
Jane,Doe,04/12/1985,FEMALE,jane.doe@example.com,555-0100,O+,Penicillin
John,Smith,11/30/1972,MALE,john.smith@example.com,555-0101,A-,";

const RECORD_EXAMPLE: &str = "\
patientId,recordType,description,diagnosis,treatment,doctorName,visitDate
1,CONSULTATION,Annual checkup,Healthy,None,Dr. Adams,05/02/2024
2,LAB_RESULT,Blood panel,Low iron,Supplements,Dr. Chen,05/03/2024";

/// The `fileType` radio group.
#[component]
pub fn FileTypeSelector(
    kind: Signal<UploadKind>,
    on_change: Callback<String>,
) -> impl IntoView {
    let radio = move |value: UploadKind, id: &'static str| {
        view! {
            <div class="form-check form-check-inline">
                <input
                    class="form-check-input"
                    type="radio"
                    name="fileType"
                    id=id
                    value=value.radio_value()
                    checked={value == UploadKind::default()}
                    prop:checked=move || kind.get() == value
                    on:change=move |ev| on_change.call(event_target_value(&ev))
                />
                <label class="form-check-label" for=id>{value.label()}</label>
            </div>
        }
    };

    view! {
        <div class="mb-3">
            <label class="form-label d-block">
                "File Type "
                <i
                    class="fas fa-question-circle text-muted"
                    data-bs-toggle="tooltip"
                    title="Each file type is sent to its own ingestion endpoint"
                ></i>
            </label>
            {radio(UploadKind::Patients, "fileTypePatients")}
            {radio(UploadKind::MedicalRecords, "fileTypeRecords")}
        </div>
    }
}

/// Example CSV layouts; exactly one is visible.
#[component]
pub fn ExampleSection(kind: Signal<UploadKind>) -> impl IntoView {
    let panel_class = move |panel: UploadKind| {
        if kind.get() == panel {
            "example-panel"
        } else {
            "example-panel d-none"
        }
    };

    view! {
        <div id="exampleSection" class="card mt-4">
            <div class="card-body">
                <h6 class="card-title">"Expected format"</h6>
                <div id="patientExample" class=move || panel_class(UploadKind::Patients)>
                    <pre class="mb-0"><code>{PATIENT_EXAMPLE}</code></pre>
                </div>
                <div id="recordExample" class=move || panel_class(UploadKind::MedicalRecords)>
                    <pre class="mb-0"><code>{RECORD_EXAMPLE}</code></pre>
                </div>
            </div>
        </div>
    }
}
