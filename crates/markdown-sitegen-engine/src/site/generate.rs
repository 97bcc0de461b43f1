use std::path::Path;

use relative_path::RelativePathBuf;

use crate::{
    convert::{convert, extract_title},
    io::{self, IoError},
};

use super::{SiteError, SiteOptions, base_path::rebase_node, template::Template};

/// Converts one markdown file and writes it as a full HTML page.
pub fn generate_page(
    from: &Path,
    template: &Template,
    dest: &Path,
    base_path: &str,
) -> Result<(), SiteError> {
    log::info!(
        "Generating page from {} to {}",
        from.display(),
        dest.display()
    );

    let markdown = io::read_file(from)?;
    let convert_error = |source| SiteError::Convert {
        path: from.to_path_buf(),
        source,
    };
    let content = rebase_node(convert(&markdown).map_err(convert_error)?, base_path).serialize();
    let title = extract_title(&markdown).map_err(convert_error)?;

    let page = template.with_base_path(base_path).render(&title, &content);
    io::write_file(dest, &page)?;
    Ok(())
}

/// Generates a page for every `.md` file under `content_root`.
///
/// `content/blog/post.md` is written to `dest_root/blog/post.html`.
/// Returns the number of pages written.
pub fn generate_pages_recursive(
    content_root: &Path,
    template: &Template,
    dest_root: &Path,
    base_path: &str,
) -> Result<usize, SiteError> {
    let files = io::scan_markdown_files(content_root)?;
    for file in &files {
        let relative = file
            .strip_prefix(content_root)
            .ok()
            .and_then(|p| RelativePathBuf::from_path(p).ok())
            .ok_or_else(|| SiteError::OutsideContentDir(file.clone()))?;
        let dest = relative.with_extension("html").to_path(dest_root);
        generate_page(file, template, &dest, base_path)?;
    }
    Ok(files.len())
}

/// Copies static assets into the output directory, then generates every page.
///
/// The output directory is recreated from scratch, so it may not hold any
/// of the build's inputs.
pub fn build_site(options: &SiteOptions) -> Result<usize, SiteError> {
    for input in [&options.content_dir, &options.template_path] {
        if io::is_within(input, &options.output_dir)? {
            return Err(IoError::OverlappingDirs {
                src: input.clone(),
                dst: options.output_dir.clone(),
            }
            .into());
        }
    }

    log::info!(
        "Copying static files from {} to {}",
        options.static_dir.display(),
        options.output_dir.display()
    );
    io::copy_dir(&options.static_dir, &options.output_dir)?;

    let template = Template::load(&options.template_path)?;
    let pages = generate_pages_recursive(
        &options.content_dir,
        &template,
        &options.output_dir,
        &options.base_path,
    )?;
    log::info!("Generated {pages} pages");
    Ok(pages)
}
