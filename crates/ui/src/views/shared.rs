use std::path::{Path, PathBuf};

use dioxus::prelude::*;
use services::CourseService;
use services::dto::Course;

use crate::context::AppContext;
use crate::views::ViewError;
use crate::views::guard::ViewErrorNotice;
use crate::vm::{CourseCardVm, CourseDetailVm, MaterialVm, map_materials};

/// Attach PDFs and quizzes to an already fetched course.
pub async fn load_course_materials(
    courses: &CourseService,
    course: Course,
) -> Result<CourseDetailVm, ViewError> {
    let pdfs = courses.course_pdfs(course.id).await?;
    let quizzes = courses.course_quizzes(course.id).await?;
    Ok(CourseDetailVm {
        course: CourseCardVm::from(&course),
        pdfs: map_materials(&pdfs),
        quizzes: map_materials(&quizzes),
    })
}

#[component]
pub fn StatTile(label: &'static str, value: u64) -> Element {
    rsx! {
        div { class: "stat-tile",
            span { class: "stat-value", "{value}" }
            span { class: "stat-label", "{label}" }
        }
    }
}

/// Where a downloaded course PDF is written before the user opens it.
#[must_use]
pub fn pdf_download_path(dir: &Path, pdf_id: u64, title: &str) -> PathBuf {
    let stem: String = title
        .trim()
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '-' { c } else { '_' })
        .collect();
    let stem = stem.trim_matches('_');
    if stem.is_empty() {
        dir.join(format!("course-pdf-{pdf_id}.pdf"))
    } else {
        dir.join(format!("{stem}-{pdf_id}.pdf"))
    }
}

async fn save_pdf(courses: &CourseService, pdf: &MaterialVm) -> Result<PathBuf, ViewError> {
    let bytes = courses.download_pdf(pdf.id).await?;
    let dir = std::env::temp_dir().join("edu-portal");
    let path = pdf_download_path(&dir, pdf.id, &pdf.title);
    std::fs::create_dir_all(&dir)
        .and_then(|()| std::fs::write(&path, &bytes))
        .map_err(|err| {
            tracing::error!(error = %err, path = %path.display(), "could not save pdf");
            ViewError::Server(format!("Could not save the PDF: {err}"))
        })?;
    tracing::debug!(pdf_id = pdf.id, path = %path.display(), "pdf saved");
    Ok(path)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum MaterialAction {
    Open,
    Delete,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum MaterialKind {
    Pdf,
    Quiz,
}

/// Course header with its PDFs and quizzes.
///
/// Everyone may open PDFs. With `manage`, PDFs and quizzes can be deleted
/// and `on_changed` fires so the parent can reload.
#[component]
pub fn CourseDetail(
    detail: CourseDetailVm,
    #[props(default)] manage: bool,
    on_changed: Option<EventHandler<()>>,
) -> Element {
    let ctx = use_context::<AppContext>();
    let mut notice = use_signal(|| None::<Result<String, ViewError>>);
    let course = detail.course;

    let on_material = use_callback(move |(kind, action, item): (MaterialKind, MaterialAction, MaterialVm)| {
        let courses = ctx.courses();
        spawn(async move {
            let outcome = match (kind, action) {
                (MaterialKind::Pdf, MaterialAction::Open) => save_pdf(&courses, &item)
                    .await
                    .map(|path| format!("Saved to {}", path.display())),
                (MaterialKind::Pdf, MaterialAction::Delete) => courses
                    .delete_pdf(item.id)
                    .await
                    .map(|()| format!("Deleted {}", item.title))
                    .map_err(ViewError::from),
                (MaterialKind::Quiz, MaterialAction::Delete) => courses
                    .delete_quiz(item.id)
                    .await
                    .map(|()| format!("Deleted {}", item.title))
                    .map_err(ViewError::from),
                (MaterialKind::Quiz, MaterialAction::Open) => return,
            };
            let changed = outcome.is_ok() && action == MaterialAction::Delete;
            notice.set(Some(outcome));
            if changed {
                if let Some(handler) = on_changed {
                    handler.call(());
                }
            }
        });
    });

    rsx! {
        article { class: "course-detail",
            h2 { "{course.title}" }
            p { class: "course-teacher", "Teacher: {course.teacher}" }
            p { "{course.description}" }

            match notice() {
                Some(Ok(message)) => rsx! { p { class: "notice", "{message}" } },
                Some(Err(err)) => rsx! { ViewErrorNotice { err } },
                None => rsx! {},
            }

            h3 { "PDFs" }
            MaterialList {
                items: detail.pdfs,
                kind: MaterialKind::Pdf,
                manage,
                empty: "No PDFs uploaded yet.",
                on_material,
            }

            h3 { "Quizzes" }
            MaterialList {
                items: detail.quizzes,
                kind: MaterialKind::Quiz,
                manage,
                empty: "No quizzes yet.",
                on_material,
            }
        }
    }
}

#[component]
fn MaterialList(
    items: Vec<MaterialVm>,
    kind: MaterialKind,
    manage: bool,
    empty: &'static str,
    on_material: EventHandler<(MaterialKind, MaterialAction, MaterialVm)>,
) -> Element {
    if items.is_empty() {
        return rsx! { p { class: "empty", "{empty}" } };
    }
    rsx! {
        ul { class: "materials",
            for item in items {
                li { key: "{item.id}",
                    span { class: "material-title", "{item.title}" }
                    span { class: "material-detail", "{item.detail}" }
                    if kind == MaterialKind::Pdf {
                        button {
                            class: "open",
                            onclick: {
                                let item = item.clone();
                                move |_| on_material.call((kind, MaterialAction::Open, item.clone()))
                            },
                            "Open"
                        }
                    }
                    if manage {
                        button {
                            class: "danger",
                            onclick: {
                                let item = item.clone();
                                move |_| on_material.call((kind, MaterialAction::Delete, item.clone()))
                            },
                            "Delete"
                        }
                    }
                }
            }
        }
    }
}

/// Course summary card; `children` is the title, usually a link.
#[component]
pub fn CourseCard(card: CourseCardVm, children: Element) -> Element {
    rsx! {
        li { class: "course-card",
            div { class: "course-title", {children} }
            p { class: "course-description", "{card.description}" }
            p { class: "course-meta", "{card.teacher} · updated {card.updated_at_str}" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pdf_file_name_is_sanitized_and_unique_per_id() {
        let dir = Path::new("/tmp/edu-portal");
        assert_eq!(
            pdf_download_path(dir, 4, "Chapter 1: Sets/Logic"),
            dir.join("Chapter_1__Sets_Logic-4.pdf")
        );
        assert_eq!(pdf_download_path(dir, 9, "  ///  "), dir.join("course-pdf-9.pdf"));
    }
}
