pub fn widget_page() -> &'static str {
    INDEX_HTML
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="ja">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Nikki</title>
  <style>
    body {
      margin: 0;
      min-height: 100vh;
      background-color: #f5f5f5;
      color: #2b2a28;
      font-family: 'Hiragino Mincho ProN', 'Yu Mincho', serif;
      display: grid;
      place-items: center;
      padding: 32px 18px;
      box-sizing: border-box;
    }

    .widget {
      width: min(420px, 100%);
      background: white;
      border: 1px solid #e0ddd6;
      border-radius: 12px;
      box-shadow: 0 12px 30px rgba(43, 42, 40, 0.08);
      padding: 28px;
      display: grid;
      gap: 24px;
    }

    .access {
      display: flex;
      align-items: baseline;
      gap: 12px;
    }

    .access .label {
      font-size: 0.9rem;
      letter-spacing: 0.1em;
      color: #6f6a65;
    }

    #access-count {
      font-size: 1.6rem;
      font-weight: bold;
      font-variant-numeric: tabular-nums;
    }

    #access-kiriban {
      display: none;
      color: #c0392b;
      font-weight: bold;
      letter-spacing: 0.08em;
    }

    .like {
      display: grid;
      gap: 12px;
      justify-items: start;
    }

    #like-button {
      appearance: none;
      border: none;
      border-radius: 999px;
      padding: 10px 28px;
      font-family: inherit;
      font-size: 1rem;
      color: white;
      background: #c0392b;
      cursor: pointer;
      transition: transform 150ms ease, opacity 150ms ease;
    }

    #like-button:active {
      transform: scale(0.97);
    }

    #like-button:disabled {
      opacity: 0.45;
      cursor: default;
    }

    #like-message {
      display: grid;
      gap: 4px;
      min-height: 1.4em;
      font-size: 0.95rem;
    }

    .thank-you {
      font-weight: bold;
    }

    .like-count {
      color: #555;
    }

    .zorome {
      color: #c0392b;
      font-weight: bold;
    }

    .error {
      color: #c0392b;
    }
  </style>
</head>
<body>
  <main class="widget">
    <section class="access">
      <span class="label">アクセスカウンター</span>
      <span id="access-count">--</span>
      <span id="access-kiriban">キリ番！</span>
    </section>
    <section class="like">
      <button id="like-button" type="button">いいね！</button>
      <div id="like-message"></div>
    </section>
  </main>

  <script>
    const accessCountEl = document.getElementById('access-count');
    const kiribanEl = document.getElementById('access-kiriban');
    const likeButtonEl = document.getElementById('like-button');
    const likeMessageEl = document.getElementById('like-message');

    const apply = (command) => {
      switch (command.op) {
        case 'set_access_count':
          accessCountEl.textContent = command.text;
          break;
        case 'set_kiriban_badge_visible':
          kiribanEl.style.display = command.visible ? 'inline' : 'none';
          break;
        case 'clear_like_messages':
          likeMessageEl.innerHTML = '';
          break;
        case 'append_like_message': {
          const entry = document.createElement('div');
          entry.className = command.kind;
          entry.textContent = command.text;
          likeMessageEl.appendChild(entry);
          break;
        }
        case 'set_like_button_enabled':
          likeButtonEl.disabled = !command.enabled;
          break;
        case 'trigger_confetti':
          createConfetti();
          break;
      }
    };

    const applyAll = (commands) => {
      commands.forEach((command) => {
        if (command.after_ms) {
          setTimeout(() => apply(command), command.after_ms);
        } else {
          apply(command);
        }
      });
    };

    const loadAccessCounter = async () => {
      const counted = sessionStorage.getItem('counted') === 'true';
      const res = await fetch('/api/visit', {
        method: 'POST',
        headers: { 'content-type': 'application/json' },
        body: JSON.stringify({ counted })
      });
      if (!res.ok) {
        throw new Error('visit request failed');
      }
      const data = await res.json();
      if (data.counted) {
        sessionStorage.setItem('counted', 'true');
      }
      applyAll(data.commands);
    };

    const loadLikeCount = async () => {
      const res = await fetch('/api/like');
      if (!res.ok) {
        throw new Error('like count request failed');
      }
      applyAll((await res.json()).commands);
    };

    const createConfetti = () => {
      const colors = ['#ff6b6b', '#4ecdc4', '#45b7d1', '#f9ca24', '#e056fd'];
      for (let i = 0; i < 50; i += 1) {
        const piece = document.createElement('div');
        piece.style.cssText = `
          position: fixed;
          width: 10px;
          height: 10px;
          background: ${colors[Math.floor(Math.random() * colors.length)]};
          left: ${Math.random() * 100}%;
          top: -10px;
          opacity: ${Math.random() * 0.5 + 0.5};
          transform: rotate(${Math.random() * 360}deg);
          pointer-events: none;
          z-index: 9999;
        `;
        document.body.appendChild(piece);

        const duration = Math.random() * 3 + 2;
        const drift = (Math.random() - 0.5) * 100;
        piece.animate([
          { transform: 'translateY(0) translateX(0) rotate(0deg)', opacity: 1 },
          {
            transform: `translateY(${window.innerHeight + 10}px) translateX(${drift}px) rotate(${Math.random() * 720}deg)`,
            opacity: 0
          }
        ], {
          duration: duration * 1000,
          easing: 'ease-out'
        }).onfinish = () => piece.remove();
      }
    };

    likeButtonEl.addEventListener('click', async () => {
      likeButtonEl.disabled = true;
      try {
        const res = await fetch('/api/like', { method: 'POST' });
        if (!res.ok) {
          throw new Error('like request failed');
        }
        applyAll((await res.json()).commands);
      } catch (err) {
        console.error('いいねエラー:', err);
        likeButtonEl.disabled = false;
      }
    });

    loadAccessCounter().catch((err) => {
      console.error('アクセスカウンターエラー:', err);
      accessCountEl.textContent = 'エラー';
    });
    loadLikeCount().catch((err) => {
      console.error('いいね数取得エラー:', err);
    });
  </script>
</body>
</html>
"#;
