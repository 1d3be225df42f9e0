use crate::error::{ToxicPlantsError, Result};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

#[derive(Debug, Clone)]
pub struct ImageInfo {
    pub path: PathBuf,
    pub file_name: String,
    pub content_type: &'static str,
}

const IMAGE_TYPES: &[(&str, &str)] = &[
    ("jpg", "image/jpeg"),
    ("jpeg", "image/jpeg"),
    ("png", "image/png"),
];

/// 画像ファイル・フォルダの指定から画像一覧を作る
///
/// フォルダは直下のみをファイル名順で展開する。指定順は保持する。
pub fn collect_images(inputs: &[PathBuf]) -> Result<Vec<ImageInfo>> {
    let mut images = Vec::new();

    for input in inputs {
        if input.is_dir() {
            images.extend(scan_folder(input)?);
        } else if input.is_file() {
            let info = image_info(input)
                .ok_or_else(|| ToxicPlantsError::NoImagesFound(input.display().to_string()))?;
            images.push(info);
        } else {
            return Err(ToxicPlantsError::FileNotFound(input.display().to_string()));
        }
    }

    Ok(images)
}

pub fn scan_folder(folder: &Path) -> Result<Vec<ImageInfo>> {
    if !folder.exists() {
        return Err(ToxicPlantsError::FileNotFound(folder.display().to_string()));
    }

    let mut images: Vec<ImageInfo> = WalkDir::new(folder)
        .max_depth(1)  // 直下のみ（再帰しない）
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.path().is_file())
        .filter_map(|e| image_info(e.path()))
        .collect();

    // ファイル名でソート
    images.sort_by(|a, b| a.file_name.cmp(&b.file_name));

    Ok(images)
}

fn image_info(path: &Path) -> Option<ImageInfo> {
    let content_type = path
        .extension()
        .and_then(|ext| content_type_for(&ext.to_string_lossy()))?;

    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default();

    Some(ImageInfo {
        path: path.to_path_buf(),
        file_name,
        content_type,
    })
}

/// 拡張子からContent-Typeを取得（大文字小文字無視）
fn content_type_for(ext: &str) -> Option<&'static str> {
    IMAGE_TYPES
        .iter()
        .find(|(e, _)| e.eq_ignore_ascii_case(ext))
        .map(|(_, content_type)| *content_type)
}
