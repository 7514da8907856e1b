use crate::language_utils;

/// Index page for the translator UI
///
/// One static template, served with the language dropdown filled in from
/// the supported-language table. The page drives the upload, translate and
/// download endpoints with small fetch handlers; the translate button is
/// disabled while a request is in flight, so a second click cannot race a
/// running translation.
const INDEX_TEMPLATE: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>Markdown Content Translator</title>
<style>
body {
    font-family: Arial, sans-serif;
    background-color: #f4f4f4;
    color: #333;
    margin: 0;
    padding: 20px;
}
h1 {
    margin-top: 0;
}
.controls {
    display: flex;
    gap: 20px;
    align-items: flex-end;
    margin-bottom: 20px;
}
.controls .upload {
    flex: 3;
}
.controls .language {
    flex: 1;
}
button {
    background-color: #4CAF50;
    color: white;
    border: none;
    padding: 10px 20px;
    text-align: center;
    font-size: 16px;
    margin: 10px 0;
    cursor: pointer;
    border-radius: 5px;
    transition: background-color 0.3s, transform 0.3s;
}
button:hover {
    background-color: #45a049;
    transform: scale(1.05);
}
button:disabled {
    background-color: #9e9e9e;
    cursor: wait;
    transform: none;
}
.panes {
    display: flex;
    gap: 20px;
}
.pane {
    flex: 1;
}
.content-box {
    height: 600px;
    overflow-y: scroll;
    border: 1px solid #ccc;
    padding: 10px;
    background-color: white;
    border-radius: 5px;
    box-shadow: 0 2px 5px rgba(0, 0, 0, 0.1);
}
.status {
    min-height: 1.5em;
    color: #b00020;
}
#download-link {
    display: none;
}
@media (max-width: 768px) {
    .panes {
        flex-direction: column;
    }
    .content-box {
        height: 400px;
    }
}
@media (prefers-color-scheme: dark) {
    body {
        background-color: #333;
        color: #f4f4f4;
    }
    .content-box {
        background-color: #444;
        border: 1px solid #555;
    }
}
</style>
</head>
<body>
<h1>Markdown Content Translator</h1>
<p>Upload a PDF or text file to translate its content into your desired language while retaining the original Markdown formatting.</p>

<div class="controls">
    <div class="upload">
        <h2>Upload File</h2>
        <input type="file" id="file-input" accept=".pdf,.txt,.md">
    </div>
    <div class="language">
        <label for="language-select">Select Target Language</label>
        <select id="language-select">
<!--LANGUAGE_OPTIONS-->
        </select>
        <br>
        <button id="translate-button" disabled>Translate</button>
    </div>
</div>

<div class="status" id="status"></div>

<div class="panes">
    <div class="pane">
        <h2>Original Content</h2>
        <div class="content-box" id="original-content"><p>Upload a file to see the original content here.</p></div>
    </div>
    <div class="pane">
        <h2>Translated Content</h2>
        <div class="content-box" id="translated-content"></div>
        <a id="download-link" href="#">Download Translated Content</a>
    </div>
</div>

<script>
var sessionId = null;

var fileInput = document.getElementById("file-input");
var translateButton = document.getElementById("translate-button");
var languageSelect = document.getElementById("language-select");
var status = document.getElementById("status");
var downloadLink = document.getElementById("download-link");

fileInput.addEventListener("change", function () {
    var file = fileInput.files[0];
    if (!file) {
        return;
    }
    status.textContent = "";
    var form = new FormData();
    form.append("file", file);
    fetch("/upload", { method: "POST", body: form })
        .then(function (response) {
            return response.json().then(function (body) {
                if (!response.ok) {
                    throw new Error(body.error || "Upload failed");
                }
                return body;
            });
        })
        .then(function (body) {
            sessionId = body.session_id;
            document.getElementById("original-content").innerHTML = body.original_html;
            document.getElementById("translated-content").innerHTML = "";
            downloadLink.style.display = "none";
            translateButton.disabled = false;
        })
        .catch(function (err) {
            status.textContent = err.message;
        });
});

translateButton.addEventListener("click", function () {
    if (!sessionId) {
        return;
    }
    status.textContent = "";
    translateButton.disabled = true;
    translateButton.textContent = "Translating...";
    fetch("/translate", {
        method: "POST",
        headers: { "Content-Type": "application/json" },
        body: JSON.stringify({
            session_id: sessionId,
            target_language: languageSelect.value
        })
    })
        .then(function (response) {
            return response.json().then(function (body) {
                if (!response.ok) {
                    throw new Error(body.error || "Translation failed");
                }
                return body;
            });
        })
        .then(function (body) {
            document.getElementById("translated-content").innerHTML = body.translated_html;
            downloadLink.href = body.download_url;
            downloadLink.style.display = "inline-block";
        })
        .catch(function (err) {
            status.textContent = err.message;
        })
        .finally(function () {
            translateButton.disabled = false;
            translateButton.textContent = "Translate";
        });
});
</script>
</body>
</html>
"##;

/// Render the index page with the language dropdown filled in
pub fn render_index() -> String {
    let options: String = language_utils::supported_language_names()
        .iter()
        .map(|name| format!("            <option value=\"{name}\">{name}</option>\n"))
        .collect();

    INDEX_TEMPLATE.replace("<!--LANGUAGE_OPTIONS-->\n", &options)
}
