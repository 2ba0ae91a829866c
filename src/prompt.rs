//! Prompt for the answer generator. The citation rules here are the contract
//! the parser in `citation` relies on: `(المصدر: <name>، المادة <numbers>)`
//! with digits, dashes for runs and commas for lists.

use crate::model::{Document, HistoryTurn};

pub const NO_ANSWER_MESSAGE: &str = "لا توجد إجابة على سؤالك في الأنظمة المتاحة حالياً";

pub fn document_header(name: &str) -> String {
    format!("--- بداية النظام: {name} ---")
}

pub fn document_footer(name: &str) -> String {
    format!("--- نهاية النظام: {name} ---")
}

/// All selected documents, each framed by its header and footer so the model
/// can copy the exact name into its citations.
pub fn build_documents_text(documents: &[Document]) -> String {
    documents
        .iter()
        .map(|doc| {
            format!(
                "{}\n\n{}\n\n{}",
                document_header(&doc.name),
                doc.text,
                document_footer(&doc.name)
            )
        })
        .collect::<Vec<String>>()
        .join("\n\n")
}

pub fn build_history_text(history: &[HistoryTurn]) -> String {
    history
        .iter()
        .map(|turn| format!("{}: {}", turn.role.prompt_label(), turn.text))
        .collect::<Vec<String>>()
        .join("\n")
}

pub fn build_answer_prompt(documents_text: &str, question: &str, history: &[HistoryTurn]) -> String {
    let history_text = build_history_text(history);

    format!(
        r#"أنت "محكم"، مساعد قانوني ذكي ومفيد. مهمتك الإجابة على أسئلة المستخدم بناءً على الأنظمة الرسمية السعودية المتاحة لك فقط.

المصادر المتاحة لك:
"الأنظمة الرسمية": (المحتوى أدناه).

المهمة:
أجب على سؤال المستخدم بناءً على فهمك للنصوص المقدمة لك هنا.

تعليمات الإجابة:
1. كن مفيداً: حاول الإجابة على السؤال قدر الإمكان دون الخروج عن الأنظمة المتاحة.
2. لا تذكر معلومات قانونية أو مواد من أنظمة غير موجودة في النص المقدم لك أدناه.
3. إذا كان السؤال بعيداً تماماً عن موضوع الأنظمة المتاحة، قل: "{NO_ANSWER_MESSAGE}".
4. لا تتكلم أبداً من غير اقتباس من الأنظمة المتاحة.

قواعد الاقتباس:
1. عند الاستشهاد بمعلومة، اذكر المصدر بالتنسيق: (المصدر: [اسم النظام]، المادة [رقم المادة]).
2. [اسم النظام] يجب أن يطابق الاسم في ترويسة "--- بداية النظام: ... ---" بدقة، دون تنسيق Markdown.
3. [رقم المادة] رقم حسابي حصراً (مثلاً: 1، 5، 50) وليس نصاً؛ اكتب (المادة 1) لا (المادة الأولى).
4. للمواد المتتالية استخدم الشرطة (مثال: المادة 1-5)، وللمواد المتفرقة استخدم الفاصلة.

---محتوى الأنظمة الرسمية---
{documents_text}
---نهاية محتوى الأنظمة الرسمية---

---سجل الدردشة---
{history_text}
---نهاية سجل الدردشة---

سؤال المستخدم: {question}
"#
    )
}
