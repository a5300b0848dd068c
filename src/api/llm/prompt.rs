//! Prompt construction for word-detail lookups.
//!
//! The upstream model is asked to explain one word of a Japanese sentence in
//! Traditional Chinese (Taiwan usage) and answer with a strict JSON object.
//! The answer is never parsed here; the caller's client consumes it.

/// Keys the model is told to return, in prompt order.
pub const RESPONSE_KEYS: [&str; 7] = [
    "originalWord",
    "chineseTranslation",
    "pos",
    "furigana",
    "romaji",
    "dictionaryForm",
    "explanation",
];

/// Fields substituted into the prompt.
#[derive(Debug, Clone, Copy)]
pub struct WordQuery<'a> {
    pub word: &'a str,
    pub pos: &'a str,
    pub sentence: &'a str,
    pub furigana: Option<&'a str>,
    pub romaji: Option<&'a str>,
}

impl<'a> WordQuery<'a> {
    fn furigana(&self) -> Option<&'a str> {
        self.furigana.filter(|s| !s.is_empty())
    }

    fn romaji(&self) -> Option<&'a str> {
        self.romaji.filter(|s| !s.is_empty())
    }
}

const GUIDANCE: &str = "請特別注意：
1. 若是動詞，請準確識別時態（過去式、現在式等）、語態（被動、使役等）和敬語程度（普通體、敬體等）
2. 助動詞與動詞組合（如「食べた」）請明確說明原形與活用過程
3. 形容詞請區分い形容詞與な形容詞，並識別活用形式
4. 請準確提供辭書形，若已是辭書形，請填相同值
5. 請使用自然、口語化的繁體中文，不使用簡體字，避免英文或其他語言";

/// Build the single user message sent upstream.
pub fn build_detail_prompt(query: &WordQuery<'_>) -> String {
    let mut reading = String::new();
    if let Some(furigana) = query.furigana() {
        reading.push_str(&format!(", 讀音: {}", furigana));
    }
    if let Some(romaji) = query.romaji() {
        reading.push_str(&format!(", 羅馬音: {}", romaji));
    }

    let mut prompt = format!(
        "在日語句子「{sentence}」的上下文中，單字「{word}」(詞性: {pos}{reading}) 的具體含義是什麼？\
         請以繁體中文（台灣用語）回答，並以嚴格的 JSON 格式返回，內容中不要有 markdown 或其他非 JSON 字符。",
        sentence = query.sentence,
        word = query.word,
        pos = query.pos,
        reading = reading,
    );

    prompt.push_str("\n\n");
    prompt.push_str(GUIDANCE);
    prompt.push_str("\n\nJSON 格式範例：\n");
    prompt.push_str(&format!(
        r#"{{
  "originalWord": "{word}",
  "chineseTranslation": "這裡填繁體中文翻譯",
  "pos": "{pos}",
  "furigana": "{furigana}",
  "romaji": "{romaji}",
  "dictionaryForm": "這裡填辭書形（如果適用）",
  "explanation": "這裡填繁體中文解釋，包括詞形變化、時態、語態等詳細語法信息"
}}"#,
        word = query.word,
        pos = query.pos,
        furigana = query.furigana().unwrap_or(""),
        romaji = query.romaji().unwrap_or(""),
    ));

    prompt
}
